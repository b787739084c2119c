use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::analysis::ExpansionOptions;
use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::errors::ConfigError;
use crate::pricing::PricingConfig;

/// Slowest reading speed accepted in configuration
pub const MIN_WPM: i32 = 75;

/// Fastest reading speed accepted in configuration
pub const MAX_WPM: i32 = 200;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Reading speed in words per minute
    #[serde(default = "default_wpm")]
    pub wpm: i32,

    /// Which literal forms are spelled out before counting
    #[serde(default)]
    pub expansion: ExpansionOptions,

    /// Quote settings
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Settle time before re-running a comparison, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum number of analyses kept in memory
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching `log` filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_wpm() -> i32 {
    150
}

fn default_debounce_ms() -> u64 {
    300 // settle time after the last edit
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WPM..=MAX_WPM).contains(&self.wpm) {
            return Err(ConfigError::WpmOutOfRange {
                wpm: self.wpm,
                min: MIN_WPM,
                max: MAX_WPM,
            }
            .into());
        }

        let pricing_fields = [
            ("rate_per_word", self.pricing.rate_per_word),
            ("rate_per_minute", self.pricing.rate_per_minute),
            ("project_rate", self.pricing.project_rate),
            ("minimum_fee", self.pricing.minimum_fee),
            ("revision_surcharge", self.pricing.revision_surcharge),
        ];
        for (field, value) in pricing_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPricing { field, value }.into());
            }
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load a configuration file, writing defaults there first if it is missing
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            wpm: default_wpm(),
            expansion: ExpansionOptions::default(),
            pricing: PricingConfig::default(),
            debounce_ms: default_debounce_ms(),
            cache_capacity: default_cache_capacity(),
            log_level: LogLevel::default(),
        }
    }
}
