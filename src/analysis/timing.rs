/*!
 * Reading-time estimates.
 *
 * Converts spoken word counts into minutes at a given reading speed and adds
 * detected pause time on top.
 */

use serde::{Deserialize, Serialize};

use super::expansion::ExpansionOptions;
use super::normalizer::calculate_spoken_word_count;
use super::pauses::{detect_pauses, PauseAnalysis};

/// Reading speed used for division. Zero or negative speeds become 1.
pub fn effective_wpm(wpm: i32) -> f64 {
    if wpm <= 0 { 1.0 } else { wpm as f64 }
}

/// Minutes needed to read `word_count` words, pauses excluded
pub fn reading_minutes(word_count: usize, wpm: i32) -> f64 {
    word_count as f64 / effective_wpm(wpm)
}

/// Reading minutes plus pause time
pub fn total_minutes_with_pauses(word_count: usize, wpm: i32, total_pause_seconds: f64) -> f64 {
    reading_minutes(word_count, wpm) + total_pause_seconds / 60.0
}

/// Format minutes as "X min Y sec", "X min" or "Y sec".
///
/// Seconds are rounded; a remainder that rounds up to 60 carries into the
/// minute count.
pub fn format_duration(total_minutes: f64) -> String {
    if total_minutes <= 0.0 || !total_minutes.is_finite() {
        return "0 sec".to_string();
    }

    let mut minutes = total_minutes.floor() as u64;
    let mut seconds = ((total_minutes - minutes as f64) * 60.0).round() as u64;
    if seconds >= 60 {
        minutes += 1;
        seconds -= 60;
    }

    match (minutes, seconds) {
        (0, s) => format!("{} sec", s),
        (m, 0) => format!("{} min", m),
        (m, s) => format!("{} min {} sec", m, s),
    }
}

/// Word count and timing for one script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptAnalysis {
    pub word_count: usize,
    pub wpm: i32,
    /// Pause-free reading time in minutes
    pub reading_minutes: f64,
    pub reading_time: String,
    pub pause_analysis: PauseAnalysis,
    /// Reading time plus pauses, in minutes
    pub total_minutes: f64,
    pub total_time: String,
}

impl ScriptAnalysis {
    pub fn analyze(text: &str, wpm: i32, options: &ExpansionOptions) -> Self {
        let word_count = calculate_spoken_word_count(text, options);
        let pause_analysis = detect_pauses(text);

        let reading = reading_minutes(word_count, wpm);
        let total = total_minutes_with_pauses(word_count, wpm, pause_analysis.total_pause_seconds);

        Self {
            word_count,
            wpm,
            reading_minutes: reading,
            reading_time: format_duration(reading),
            pause_analysis,
            total_minutes: total,
            total_time: format_duration(total),
        }
    }
}
