use super::{BuiltinProfile, CipherConfig, CipherConfigBuilder, ConfigError};
use crate::alphabet::Letter;

#[test]
fn defaults_match_standard_profile() {
    let built = CipherConfigBuilder::new().build().expect("standard profile is valid");
    assert_eq!(built, CipherConfig::default());
    assert_eq!(built.fixed_alternate_letters(), Ok(vec![Letter::M, Letter::Z]));
    assert_eq!(built.row_width, 26);
}

#[test]
fn inverted_profile_sets_invert() {
    let built = CipherConfigBuilder::from_profile(BuiltinProfile::Inverted)
        .build()
        .expect("inverted profile is valid");
    assert!(built.invert);
}

#[test]
fn validation_rejects_bad_fields() {
    let mut builder = CipherConfigBuilder::new();
    builder.row_width = 0;
    assert_eq!(builder.build(), Err(ConfigError::ZeroRowWidth));

    let mut builder = CipherConfigBuilder::new();
    builder.fixed_alternates.push('7');
    assert_eq!(builder.build(), Err(ConfigError::InvalidAlternate('7')));
    assert_eq!(
        ConfigError::InvalidAlternate('7').to_string(),
        "fixed alternate '7' is not a Latin letter"
    );
}

#[test]
fn json_fills_missing_fields() {
    let config = CipherConfig::from_json(r#"{ "invert": true, "row_width": 13 }"#)
        .expect("valid json");
    assert!(config.invert);
    assert_eq!(config.row_width, 13);
    assert_eq!(config.fixed_alternates, vec!['M', 'Z']);
    assert!(!config.skip_non_alphabetic);

    let round = CipherConfig::from_json(&serde_json::to_string(&config).expect("serialise"))
        .expect("parse back");
    assert_eq!(round, config);
}

#[test]
fn builder_from_config_keeps_fields() {
    let config = CipherConfig {
        invert: true,
        fixed_alternates: vec!['q'],
        skip_non_alphabetic: true,
        row_width: 7,
    };
    let rebuilt = CipherConfigBuilder::from_config(config.clone())
        .build()
        .expect("valid");
    assert_eq!(rebuilt, config);
}
