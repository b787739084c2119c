/*!
 * Quote calculation for voice-over jobs.
 *
 * Prices a script per word, per started minute of reading time, or as a flat
 * project rate, then applies a minimum fee and a revision surcharge.
 */

use serde::{Deserialize, Serialize};

/// How a job is billed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PricingModel {
    #[default]
    PerWord,
    PerMinute,
    PerProject,
}

impl PricingModel {
    // @returns: Human readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PerWord => "Per Word",
            Self::PerMinute => "Per Minute",
            Self::PerProject => "Per Project",
        }
    }
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rates and fees used to price a script
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    #[serde(default)]
    pub model: PricingModel,

    #[serde(default = "default_rate_per_word")]
    pub rate_per_word: f64,

    #[serde(default = "default_rate_per_minute")]
    pub rate_per_minute: f64,

    #[serde(default = "default_project_rate")]
    pub project_rate: f64,

    #[serde(default = "default_minimum_fee")]
    pub minimum_fee: f64,

    /// Surcharge for revisions, in percent (50 = +50%)
    #[serde(default = "default_revision_surcharge")]
    pub revision_surcharge: f64,
}

fn default_rate_per_word() -> f64 {
    0.10
}

fn default_rate_per_minute() -> f64 {
    50.0
}

fn default_project_rate() -> f64 {
    100.0
}

fn default_minimum_fee() -> f64 {
    50.0
}

fn default_revision_surcharge() -> f64 {
    50.0
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            model: PricingModel::default(),
            rate_per_word: default_rate_per_word(),
            rate_per_minute: default_rate_per_minute(),
            project_rate: default_project_rate(),
            minimum_fee: default_minimum_fee(),
            revision_surcharge: default_revision_surcharge(),
        }
    }
}

/// A priced quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub word_count: usize,
    pub reading_time: String,
    pub reading_minutes: f64,
    pub base_price: f64,
    pub minimum_fee: f64,
    pub final_price: f64,
    pub revision_price: f64,
    pub pricing_model: PricingModel,
    pub includes_minimum_fee: bool,
}

/// Price a script.
///
/// Per-minute billing charges every started minute.
pub fn calculate_quote(
    word_count: usize,
    reading_minutes: f64,
    reading_time: &str,
    config: &PricingConfig,
) -> QuoteResult {
    let base_price = match config.model {
        PricingModel::PerWord => word_count as f64 * config.rate_per_word,
        PricingModel::PerMinute => reading_minutes.ceil() * config.rate_per_minute,
        PricingModel::PerProject => config.project_rate,
    };

    let includes_minimum_fee = base_price < config.minimum_fee;
    let final_price = base_price.max(config.minimum_fee);
    let revision_price = final_price * (1.0 + config.revision_surcharge / 100.0);

    QuoteResult {
        word_count,
        reading_time: reading_time.to_string(),
        reading_minutes,
        base_price,
        minimum_fee: config.minimum_fee,
        final_price,
        revision_price,
        pricing_model: config.model,
        includes_minimum_fee,
    }
}

/// Format an amount as US dollars, e.g. `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, remainder)
}
