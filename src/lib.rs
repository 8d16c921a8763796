//! Core library entry point for the `kryptos-lacuna` resolution engine.
//!
//! The engine deciphers a ciphertext one position at a time.  Each letter is
//! located in two grid tables derived from the ciphertext and its lacuna
//! text (the letter-wise complement against `Z`), a rule engine picks one
//! table, one corner of the resulting square and one of four transcriptions,
//! and the transcribed corner letter becomes the plaintext letter.
//!
//! | Module | Role |
//! |--------|------|
//! | [`alphabet`] | Letters, distance reflections, parity classes |
//! | [`table`] | Distance closure, cache, grid tables and border keys |
//! | [`square`] | Four-corner windows cut from a table |
//! | [`character`] | One ciphertext position and its two squares |
//! | [`rules`] | Table, corner and transcription selection |
//! | [`cipher`] | Ordered resolution of a whole ciphertext |
//! | [`config`] | Validated decode configuration |

pub mod alphabet;
pub mod character;
pub mod cipher;
pub mod config;
pub mod rules;
pub mod square;
pub mod table;

use core::fmt;

use cipher::Cipher;
use config::{CipherConfig, ConfigError};
use table::DistanceCache;

/// Result type used throughout the library.
pub type CipherResult<T> = core::result::Result<T, CipherError>;

/// Error enumeration for decode requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The input held no letters.
    EmptyCiphertext,
    /// A non-letter was found where letters are required.
    InvalidCharacter { position: usize, found: char },
    /// The configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::EmptyCiphertext => write!(f, "ciphertext contains no letters"),
            CipherError::InvalidCharacter { position, found } => {
                write!(f, "invalid character {found:?} at position {position}")
            }
            CipherError::Config(err) => write!(f, "configuration error: {err}"),
        }
    }
}

impl std::error::Error for CipherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CipherError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for CipherError {
    fn from(err: ConfigError) -> Self {
        CipherError::Config(err)
    }
}

/// Deciphers `text` with the default configuration, optionally decoding its
/// lacuna text instead.
pub fn decipher(text: &str, invert: bool) -> CipherResult<String> {
    let config = CipherConfig {
        invert,
        ..CipherConfig::default()
    };
    let cipher = Cipher::new(text, &config, &DistanceCache::new())?;
    Ok(cipher.plaintext())
}
