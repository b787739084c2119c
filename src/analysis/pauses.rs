/*!
 * Pause detection for spoken-duration estimates.
 *
 * Scans raw script text for punctuation and formatting cues and assigns each
 * a fixed pause length. The model is additive: every pass runs on its own and
 * events are pooled without deduplication, so a period inside "Mr." still
 * counts. Downstream pricing depends on these numbers.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static STAGE_DIRECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[(\[](?:beat|pause|silence|wait|breath|sigh)[)\]]").unwrap()
});

static PARAGRAPH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n+").unwrap());

static BULLET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(?:^|\n)\s*(?:[-•*]|\d+\.)\s+").unwrap());

static ELLIPSIS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{3,}|…").unwrap());

static EM_DASH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"—|--").unwrap());

/// Kind of pause cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseType {
    LineBreak,
    Paragraph,
    Bullet,
    Ellipsis,
    EmDash,
    StageDirection,
    Comma,
    Period,
    Colon,
    Semicolon,
}

impl PauseType {
    /// Pause length in seconds for one occurrence
    pub fn duration_seconds(&self) -> f64 {
        match self {
            Self::LineBreak => 0.5,
            Self::Paragraph => 1.0,
            Self::Bullet => 0.5,
            Self::Ellipsis => 1.0,
            Self::EmDash => 0.5,
            Self::StageDirection => 1.5,
            Self::Comma => 0.3,
            Self::Period => 0.5,
            Self::Colon => 0.4,
            Self::Semicolon => 0.4,
        }
    }

    // @returns: Plural label for summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::LineBreak => "Line Breaks",
            Self::Paragraph => "Paragraph Breaks",
            Self::Bullet => "Bullet Points",
            Self::Ellipsis => "Ellipses",
            Self::EmDash => "Em-Dashes",
            Self::StageDirection => "Stage Directions",
            Self::Comma => "Commas",
            Self::Period => "Periods",
            Self::Colon => "Colons",
            Self::Semicolon => "Semicolons",
        }
    }
}

/// A detected pause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseEvent {
    #[serde(rename = "type")]
    pub kind: PauseType,
    /// Byte offset into the source text
    pub position: usize,
    pub matched_text: String,
    pub duration_seconds: f64,
}

impl PauseEvent {
    fn new(kind: PauseType, position: usize, matched_text: &str) -> Self {
        Self {
            kind,
            position,
            matched_text: matched_text.to_string(),
            duration_seconds: kind.duration_seconds(),
        }
    }
}

/// All pauses found in a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseAnalysis {
    /// Events sorted by position
    pub pauses: Vec<PauseEvent>,
    pub total_pause_seconds: f64,
    pub count: usize,
}

/// Per-type aggregate used in summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PauseSummaryEntry {
    #[serde(rename = "type")]
    pub kind: PauseType,
    pub count: usize,
    pub total_seconds: f64,
}

impl PauseAnalysis {
    fn from_events(mut pauses: Vec<PauseEvent>) -> Self {
        // Stable: events at the same offset keep pass order.
        pauses.sort_by_key(|p| p.position);
        let total_pause_seconds = pauses.iter().map(|p| p.duration_seconds).sum();
        let count = pauses.len();
        Self {
            pauses,
            total_pause_seconds,
            count,
        }
    }

    /// Group events by type in order of first appearance
    pub fn summary(&self) -> Vec<PauseSummaryEntry> {
        let mut entries: Vec<PauseSummaryEntry> = Vec::new();
        for pause in &self.pauses {
            match entries.iter_mut().find(|e| e.kind == pause.kind) {
                Some(entry) => {
                    entry.count += 1;
                    entry.total_seconds += pause.duration_seconds;
                }
                None => entries.push(PauseSummaryEntry {
                    kind: pause.kind,
                    count: 1,
                    total_seconds: pause.duration_seconds,
                }),
            }
        }
        entries
    }
}

/// Detect pause cues in raw (not normalized) text
pub fn detect_pauses(text: &str) -> PauseAnalysis {
    if text.is_empty() {
        return PauseAnalysis::default();
    }

    let mut events = Vec::new();

    collect_regex(&mut events, &STAGE_DIRECTION_REGEX, PauseType::StageDirection, text);
    collect_regex(&mut events, &PARAGRAPH_REGEX, PauseType::Paragraph, text);
    collect_line_breaks(&mut events, text);
    collect_regex(&mut events, &BULLET_REGEX, PauseType::Bullet, text);
    collect_regex(&mut events, &ELLIPSIS_REGEX, PauseType::Ellipsis, text);
    collect_regex(&mut events, &EM_DASH_REGEX, PauseType::EmDash, text);
    collect_punctuation(&mut events, text);

    PauseAnalysis::from_events(events)
}

fn collect_regex(events: &mut Vec<PauseEvent>, regex: &Regex, kind: PauseType, text: &str) {
    events.extend(
        regex
            .find_iter(text)
            .map(|m| PauseEvent::new(kind, m.start(), m.as_str())),
    );
}

/// Newlines with no newline directly before or after
fn collect_line_breaks(events: &mut Vec<PauseEvent>, text: &str) {
    let bytes = text.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        if *byte != b'\n' {
            continue;
        }
        let newline_before = idx > 0 && bytes[idx - 1] == b'\n';
        let newline_after = bytes.get(idx + 1) == Some(&b'\n');
        if !newline_before && !newline_after {
            events.push(PauseEvent::new(PauseType::LineBreak, idx, "\n"));
        }
    }
}

/// Commas, periods, colons and semicolons, each as its own pass
fn collect_punctuation(events: &mut Vec<PauseEvent>, text: &str) {
    let bytes = text.as_bytes();
    let before = |idx: usize| if idx > 0 { Some(bytes[idx - 1]) } else { None };
    let after = |idx: usize| bytes.get(idx + 1).copied();
    let is_digit = |b: Option<u8>| b.is_some_and(|b| b.is_ascii_digit());

    for (idx, byte) in bytes.iter().enumerate() {
        // Thousands separator
        if *byte == b',' && !(is_digit(before(idx)) && is_digit(after(idx))) {
            events.push(PauseEvent::new(PauseType::Comma, idx, ","));
        }
    }

    for (idx, byte) in bytes.iter().enumerate() {
        // Ellipsis fragments and decimal points
        if *byte == b'.'
            && before(idx) != Some(b'.')
            && after(idx) != Some(b'.')
            && !is_digit(before(idx))
        {
            events.push(PauseEvent::new(PauseType::Period, idx, "."));
        }
    }

    for (idx, byte) in bytes.iter().enumerate() {
        if *byte == b':' {
            events.push(PauseEvent::new(PauseType::Colon, idx, ":"));
        }
    }

    for (idx, byte) in bytes.iter().enumerate() {
        if *byte == b';' {
            events.push(PauseEvent::new(PauseType::Semicolon, idx, ";"));
        }
    }
}
