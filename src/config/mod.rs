//! Decoder configuration.
//!
//! [`CipherConfig`] is the validated, serialisable description of a decode
//! run.  It is usually assembled through [`CipherConfigBuilder`], which starts
//! from one of the [`BuiltinProfile`]s, and can be loaded from JSON.
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `invert` | `false` | Decode the lacuna of the ciphertext instead of the ciphertext. |
//! | `fixed_alternates` | `['M', 'Z']` | Letters whose alternation flag is always set. |
//! | `skip_non_alphabetic` | `false` | Drop non-letters instead of rejecting the input. |
//! | `row_width` | `26` | Letters per row when laying out plaintext. |

mod builder;

pub use builder::{BuiltinProfile, CipherConfigBuilder};

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Letter, ALPHABET_LEN};

/// Errors reported by [`CipherConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Plaintext rows must hold at least one letter.
    ZeroRowWidth,
    /// A fixed alternate was not a Latin letter.
    InvalidAlternate(char),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroRowWidth => write!(f, "row width must be non-zero"),
            ConfigError::InvalidAlternate(ch) => {
                write!(f, "fixed alternate {ch:?} is not a Latin letter")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration of a single decode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    pub invert: bool,
    pub fixed_alternates: Vec<char>,
    pub skip_non_alphabetic: bool,
    pub row_width: usize,
}

impl CipherConfig {
    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_width == 0 {
            return Err(ConfigError::ZeroRowWidth);
        }
        self.fixed_alternate_letters().map(|_| ())
    }

    /// Fixed alternates as letters.
    pub fn fixed_alternate_letters(&self) -> Result<Vec<Letter>, ConfigError> {
        self.fixed_alternates
            .iter()
            .map(|&ch| Letter::from_char(ch).ok_or(ConfigError::InvalidAlternate(ch)))
            .collect()
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<CipherConfig, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        CipherConfig {
            invert: false,
            fixed_alternates: vec!['M', 'Z'],
            skip_non_alphabetic: false,
            row_width: ALPHABET_LEN as usize,
        }
    }
}

#[cfg(test)]
mod tests;
