use super::{CipherConfig, ConfigError};

/// Builder used to assemble a [`CipherConfig`] with validation.
///
/// | Field | Default |
/// |-------|---------|
/// | `invert` | `false` |
/// | `fixed_alternates` | `M`, `Z` |
/// | `skip_non_alphabetic` | `false` |
/// | `row_width` | `26` |
#[derive(Debug, Clone)]
pub struct CipherConfigBuilder {
    pub invert: bool,
    pub fixed_alternates: Vec<char>,
    pub skip_non_alphabetic: bool,
    pub row_width: usize,
}

impl CipherConfigBuilder {
    /// Returns a builder initialised with the standard profile.
    pub fn new() -> Self {
        Self::from_profile(BuiltinProfile::Standard)
    }

    /// Loads one of the built-in profiles.
    ///
    /// | Profile | Description | Invert |
    /// |---------|-------------|--------|
    /// | `Standard` | Decodes the ciphertext as given | no |
    /// | `Inverted` | Decodes the lacuna of the ciphertext | yes |
    pub fn from_profile(profile: BuiltinProfile) -> Self {
        let base = CipherConfig::default();
        CipherConfigBuilder {
            invert: matches!(profile, BuiltinProfile::Inverted),
            fixed_alternates: base.fixed_alternates,
            skip_non_alphabetic: base.skip_non_alphabetic,
            row_width: base.row_width,
        }
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: CipherConfig) -> Self {
        CipherConfigBuilder {
            invert: config.invert,
            fixed_alternates: config.fixed_alternates,
            skip_non_alphabetic: config.skip_non_alphabetic,
            row_width: config.row_width,
        }
    }

    /// Validates the builder fields and emits a [`CipherConfig`].
    pub fn build(&self) -> Result<CipherConfig, ConfigError> {
        let config = CipherConfig {
            invert: self.invert,
            fixed_alternates: self.fixed_alternates.clone(),
            skip_non_alphabetic: self.skip_non_alphabetic,
            row_width: self.row_width,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Supported built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinProfile {
    /// Decodes the ciphertext as given.
    Standard,
    /// Decodes the lacuna of the ciphertext.
    Inverted,
}

impl Default for CipherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
