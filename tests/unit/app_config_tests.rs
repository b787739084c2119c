/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use voscript::analysis::ExpansionKind;
use voscript::app_config::{Config, LogLevel, MAX_WPM, MIN_WPM};
use voscript::errors::ConfigError;
use voscript::pricing::PricingModel;

use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.wpm, 150);
    assert_eq!(config.debounce_ms, 300);
    assert_eq!(config.cache_capacity, 256);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.pricing.model, PricingModel::PerWord);
    assert!(config.expansion.is_enabled(ExpansionKind::Numbers));
    assert!(!config.expansion.is_enabled(ExpansionKind::Urls));
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withWpmBounds_shouldAcceptInclusiveRange() {
    let mut config = Config::default();

    config.wpm = MIN_WPM;
    assert!(config.validate().is_ok());
    config.wpm = MAX_WPM;
    assert!(config.validate().is_ok());

    config.wpm = MIN_WPM - 1;
    let err = config.validate().unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::WpmOutOfRange { wpm: 74, min: 75, max: 200 })
    );

    config.wpm = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_validation_withNegativeRate_shouldReject() {
    let mut config = Config::default();
    config.pricing.minimum_fee = -1.0;

    let err = config.validate().unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::InvalidPricing { field, .. }) => assert_eq!(*field, "minimum_fee"),
        other => panic!("unexpected error: {:?}", other),
    }

    config.pricing.minimum_fee = 0.0;
    config.pricing.rate_per_word = f64::NAN;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_deserialize_withPartialJson_shouldFillDefaults() -> Result<()> {
    let json = r#"{
        "wpm": 120,
        "expansion": { "expandURLs": true, "expandDates": false },
        "pricing": { "model": "per_minute" }
    }"#;
    let config: Config = serde_json::from_str(json)?;

    assert_eq!(config.wpm, 120);
    assert!(config.expansion.expand_urls);
    assert!(!config.expansion.expand_dates);
    assert!(config.expansion.expand_numbers);
    assert_eq!(config.pricing.model, PricingModel::PerMinute);
    assert_eq!(config.pricing.rate_per_minute, 50.0);
    assert_eq!(config.debounce_ms, 300);
    assert_eq!(config.log_level, LogLevel::Info);
    Ok(())
}

#[test]
fn test_config_serialize_shouldUseExpansionFieldNames() -> Result<()> {
    let json = serde_json::to_string(&Config::default())?;
    assert!(json.contains("\"expandNumbers\":true"));
    assert!(json.contains("\"expandURLs\":false"));
    assert!(json.contains("\"log_level\":\"info\""));
    Ok(())
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&config_path)?;
    assert_eq!(config, Config::default());
    assert!(config_path.exists());

    let reloaded = Config::load(&config_path)?;
    assert_eq!(reloaded, config);
    Ok(())
}

#[test]
fn test_load_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let err = Config::load(&config_path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_save_withModifiedConfig_shouldRoundTripThroughFile() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let config_path = temp_dir.path().join("custom.json");

    let mut config = Config::default();
    config.wpm = 180;
    config.expansion.toggle(ExpansionKind::Urls);
    config.log_level = LogLevel::Debug;
    config.save(&config_path)?;

    assert_eq!(Config::load(&config_path)?, config);
    Ok(())
}

#[test]
fn test_logLevel_toLevelFilter_shouldMapEachLevel() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
