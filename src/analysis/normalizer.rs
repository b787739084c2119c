/*!
 * Spoken-text normalization and word counting.
 *
 * Literal text (URLs, dates, measurements, percentages, currencies, bare
 * numbers) is rewritten into the words a narrator would say, punctuation is
 * stripped, and the remaining words are counted.
 *
 * The rewrites run as an explicit ordered list of stages. Order matters:
 * currency, percentage and measurement stages must run before the bare
 * number stage, otherwise `$100` would lose its unit or be expanded twice.
 */

use std::fmt;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::expansion::ExpansionOptions;
use super::spoken_numbers::{
    expand_two_digit_year, integer_to_words, month_name, spell_numeric_literal,
};

/// Integer or decimal literal with optional thousands separators
const NUMBER: &str = r"\d+(?:,\d{3})*(?:\.\d+)?";

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*",
    )
    .unwrap()
});

static URL_SCHEME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(\d{1,2})/(\d{1,2})/(\d{4}|\d{2})\b|\b(\d{1,2})-(\d{1,2})-(\d{4}|\d{2})\b",
    )
    .unwrap()
});

static FEET_INCHES_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(\d+)'(\d+)""#).unwrap());

static MASS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({})\s*(kg|lbs|lb|pounds|pound|g)\b", NUMBER)).unwrap()
});

static SPEED_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"({})\s*(mph|km/h|kmh)\b", NUMBER)).unwrap()
});

static DISTANCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"({})\s*(kilometers|meters|miles|feet|km|ft|mi|m)\b",
        NUMBER
    ))
    .unwrap()
});

static PERCENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"({})%", NUMBER)).unwrap());

static CURRENCY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"([$€£])({})", NUMBER)).unwrap());

static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(NUMBER).unwrap());

static NON_WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]|_").unwrap());

static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Identifies a rewrite stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Urls,
    Dates,
    Measurements,
    Percentages,
    Currencies,
    Numbers,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Urls => "urls",
            Self::Dates => "dates",
            Self::Measurements => "measurements",
            Self::Percentages => "percentages",
            Self::Currencies => "currencies",
            Self::Numbers => "numbers",
        };
        write!(f, "{}", name)
    }
}

/// One global rewrite pass over the text
#[derive(Clone)]
pub struct Stage {
    pub kind: StageKind,
    pub enabled: bool,
    transform: fn(&str) -> String,
}

impl Stage {
    pub fn new(kind: StageKind, enabled: bool, transform: fn(&str) -> String) -> Self {
        Self {
            kind,
            enabled,
            transform,
        }
    }

    pub fn apply(&self, text: &str) -> String {
        (self.transform)(text)
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage")
            .field("kind", &self.kind)
            .field("enabled", &self.enabled)
            .finish()
    }
}

/// Ordered rewrite stages followed by punctuation cleanup
#[derive(Debug, Clone)]
pub struct NormalizerPipeline {
    stages: Vec<Stage>,
}

impl NormalizerPipeline {
    /// Build the standard stage order for the given options.
    ///
    /// The URL stage is always active: it spells URLs out when URL expansion
    /// is on and deletes them otherwise.
    pub fn from_options(options: &ExpansionOptions) -> Self {
        let url_transform: fn(&str) -> String = if options.expand_urls {
            expand_urls
        } else {
            strip_urls
        };

        Self {
            stages: vec![
                Stage::new(StageKind::Urls, true, url_transform),
                Stage::new(StageKind::Dates, options.expand_dates, expand_dates),
                Stage::new(
                    StageKind::Measurements,
                    options.expand_measurements,
                    expand_measurements,
                ),
                Stage::new(
                    StageKind::Percentages,
                    options.expand_percentages,
                    expand_percentages,
                ),
                Stage::new(
                    StageKind::Currencies,
                    options.expand_currencies,
                    expand_currencies,
                ),
                Stage::new(StageKind::Numbers, options.expand_numbers, expand_numbers),
            ],
        }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn set_enabled(&mut self, kind: StageKind, enabled: bool) {
        for stage in self.stages.iter_mut().filter(|s| s.kind == kind) {
            stage.enabled = enabled;
        }
    }

    /// Move a stage to a new position in the run order
    pub fn move_stage(&mut self, kind: StageKind, index: usize) {
        if let Some(current) = self.stages.iter().position(|s| s.kind == kind) {
            let stage = self.stages.remove(current);
            let index = index.min(self.stages.len());
            self.stages.insert(index, stage);
        }
    }

    /// Run the enabled rewrite stages in order
    pub fn expand(&self, text: &str) -> String {
        let mut current = text.to_string();
        for stage in self.stages.iter().filter(|s| s.enabled) {
            let next = stage.apply(&current);
            if next != current {
                debug!("Normalizer stage '{}' rewrote text", stage.kind);
            }
            current = next;
        }
        current
    }

    /// Expanded text with punctuation stripped and whitespace collapsed
    pub fn normalize(&self, text: &str) -> String {
        clean_spoken_text(&self.expand(text))
    }

    pub fn count_words(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        count_clean_words(&self.normalize(text))
    }
}

/// Number of words a narrator would speak for `text`
pub fn calculate_spoken_word_count(text: &str, options: &ExpansionOptions) -> usize {
    NormalizerPipeline::from_options(options).count_words(text)
}

/// Strip everything but word characters and whitespace, then collapse
/// whitespace runs to single spaces
pub fn clean_spoken_text(text: &str) -> String {
    let stripped = NON_WORD_REGEX.replace_all(text, "");
    WHITESPACE_RUN_REGEX.replace_all(&stripped, " ").into_owned()
}

fn count_clean_words(clean: &str) -> usize {
    let trimmed = clean.trim();
    if trimmed.is_empty() {
        0
    } else {
        trimmed.split(' ').count()
    }
}

/// Spell a literal, or keep `fallback` when it cannot be spelled
fn spell_or_keep(literal: &str, fallback: &str) -> Option<String> {
    let spelled = spell_numeric_literal(literal);
    if spelled.is_none() {
        warn!("Could not spell out '{}', keeping it as written", fallback);
    }
    spelled
}

fn expand_urls(text: &str) -> String {
    URL_REGEX
        .replace_all(text, |caps: &Captures| {
            let without_scheme = URL_SCHEME_REGEX.replace(&caps[0], "");
            without_scheme.replace('.', " dot ").replace('/', " slash ")
        })
        .into_owned()
}

fn strip_urls(text: &str) -> String {
    URL_REGEX.replace_all(text, "").into_owned()
}

fn expand_dates(text: &str) -> String {
    DATE_REGEX
        .replace_all(text, |caps: &Captures| {
            let (month, day, year) = if caps.get(1).is_some() {
                (&caps[1], &caps[2], &caps[3])
            } else {
                (&caps[4], &caps[5], &caps[6])
            };
            spell_date(month, day, year).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn spell_date(month: &str, day: &str, year: &str) -> Option<String> {
    let month: u64 = month.parse().ok()?;
    let day: u64 = day.parse().ok()?;
    let mut year_value: u64 = year.parse().ok()?;
    if year.len() == 2 {
        year_value = expand_two_digit_year(year_value);
    }

    Some(format!(
        "{} {} {}",
        month_name(month),
        integer_to_words(day)?,
        integer_to_words(year_value)?
    ))
}

fn expand_measurements(text: &str) -> String {
    let text = FEET_INCHES_REGEX.replace_all(text, |caps: &Captures| {
        match (spell_or_keep(&caps[1], &caps[0]), spell_or_keep(&caps[2], &caps[0])) {
            (Some(feet), Some(inches)) => format!("{} feet {} inches", feet, inches),
            _ => caps[0].to_string(),
        }
    });

    let text = MASS_REGEX.replace_all(&text, |caps: &Captures| {
        let unit = match &caps[2] {
            "kg" => "kilograms",
            "g" => "grams",
            _ => "pounds",
        };
        match spell_or_keep(&caps[1], &caps[0]) {
            Some(words) => format!("{} {}", words, unit),
            None => caps[0].to_string(),
        }
    });

    let text = SPEED_REGEX.replace_all(&text, |caps: &Captures| {
        let unit = match &caps[2] {
            "mph" => "miles per hour",
            _ => "kilometers per hour",
        };
        match spell_or_keep(&caps[1], &caps[0]) {
            Some(words) => format!("{} {}", words, unit),
            None => caps[0].to_string(),
        }
    });

    // Distance units are kept as written.
    DISTANCE_REGEX
        .replace_all(&text, |caps: &Captures| {
            match spell_or_keep(&caps[1], &caps[0]) {
                Some(words) => format!("{} {}", words, &caps[2]),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn expand_percentages(text: &str) -> String {
    PERCENT_REGEX
        .replace_all(text, |caps: &Captures| match spell_or_keep(&caps[1], &caps[0]) {
            Some(words) => format!("{} percent", words),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn expand_currencies(text: &str) -> String {
    CURRENCY_REGEX
        .replace_all(text, |caps: &Captures| {
            let unit = match &caps[1] {
                "$" => "dollars",
                "€" => "euros",
                _ => "pounds",
            };
            match spell_or_keep(&caps[2], &caps[0]) {
                Some(words) => format!("{} {}", words, unit),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

fn expand_numbers(text: &str) -> String {
    NUMBER_REGEX
        .replace_all(text, |caps: &Captures| {
            spell_or_keep(&caps[0], &caps[0]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
