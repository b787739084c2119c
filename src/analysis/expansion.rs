/*!
 * Expansion toggles for spoken word counting.
 */

use serde::{Deserialize, Serialize};

/// Which literal forms are spelled out before counting.
///
/// Missing fields deserialize to their defaults: everything on except URLs,
/// which are usually skipped when read aloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionOptions {
    #[serde(rename = "expandNumbers")]
    pub expand_numbers: bool,

    #[serde(rename = "expandDates")]
    pub expand_dates: bool,

    #[serde(rename = "expandCurrencies")]
    pub expand_currencies: bool,

    #[serde(rename = "expandPercentages")]
    pub expand_percentages: bool,

    #[serde(rename = "expandURLs", alias = "expandUrls")]
    pub expand_urls: bool,

    #[serde(rename = "expandMeasurements")]
    pub expand_measurements: bool,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            expand_numbers: true,
            expand_dates: true,
            expand_currencies: true,
            expand_percentages: true,
            expand_urls: false,
            expand_measurements: true,
        }
    }
}

/// One of the six expansion toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpansionKind {
    Numbers,
    Dates,
    Currencies,
    Percentages,
    Urls,
    Measurements,
}

impl ExpansionKind {
    pub const ALL: [ExpansionKind; 6] = [
        ExpansionKind::Numbers,
        ExpansionKind::Dates,
        ExpansionKind::Currencies,
        ExpansionKind::Percentages,
        ExpansionKind::Urls,
        ExpansionKind::Measurements,
    ];

    // @returns: Short UI label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Numbers => "Numbers",
            Self::Dates => "Dates",
            Self::Currencies => "Currencies",
            Self::Percentages => "Percentages",
            Self::Urls => "URLs",
            Self::Measurements => "Measurements",
        }
    }

    // @returns: Before/after example for help text
    pub fn example(&self) -> &'static str {
        match self {
            Self::Numbers => "10,000 → ten thousand",
            Self::Dates => "01/12/25 → January twelve two thousand twenty-five",
            Self::Currencies => "$1,250 → one thousand two hundred fifty dollars",
            Self::Percentages => "15% → fifteen percent",
            Self::Urls => "example.com → example dot com",
            Self::Measurements => "5'10\" → five feet ten inches",
        }
    }
}

impl ExpansionOptions {
    /// Everything off: only punctuation cleanup and URL removal apply
    pub fn none() -> Self {
        Self {
            expand_numbers: false,
            expand_dates: false,
            expand_currencies: false,
            expand_percentages: false,
            expand_urls: false,
            expand_measurements: false,
        }
    }

    pub fn is_enabled(&self, kind: ExpansionKind) -> bool {
        match kind {
            ExpansionKind::Numbers => self.expand_numbers,
            ExpansionKind::Dates => self.expand_dates,
            ExpansionKind::Currencies => self.expand_currencies,
            ExpansionKind::Percentages => self.expand_percentages,
            ExpansionKind::Urls => self.expand_urls,
            ExpansionKind::Measurements => self.expand_measurements,
        }
    }

    pub fn set(&mut self, kind: ExpansionKind, enabled: bool) {
        let slot = match kind {
            ExpansionKind::Numbers => &mut self.expand_numbers,
            ExpansionKind::Dates => &mut self.expand_dates,
            ExpansionKind::Currencies => &mut self.expand_currencies,
            ExpansionKind::Percentages => &mut self.expand_percentages,
            ExpansionKind::Urls => &mut self.expand_urls,
            ExpansionKind::Measurements => &mut self.expand_measurements,
        };
        *slot = enabled;
    }

    /// Flip one toggle
    pub fn toggle(&mut self, kind: ExpansionKind) {
        let current = self.is_enabled(kind);
        self.set(kind, !current);
    }

    /// Builder-style variant of [`ExpansionOptions::set`]
    pub fn with(mut self, kind: ExpansionKind, enabled: bool) -> Self {
        self.set(kind, enabled);
        self
    }

    /// Restore documented defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
