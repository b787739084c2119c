/*!
 * Side-by-side statistics for two script revisions.
 */

use serde::{Deserialize, Serialize};

use super::diff::{ComparisonResult, DiffSegment, SegmentType};
use super::timing::{effective_wpm, ScriptAnalysis};

/// How the revised script differs from the original in time and length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    pub original_word_count: usize,
    pub revised_word_count: usize,
    /// Revised minus original
    pub word_count_delta: i64,
    /// Reading-time change in seconds, pauses excluded
    pub reading_seconds_delta: f64,
    /// Pause-time change in seconds
    pub pause_seconds_delta: f64,
}

impl ComparisonStats {
    pub fn between(original: &ScriptAnalysis, revised: &ScriptAnalysis) -> Self {
        let word_count_delta = revised.word_count as i64 - original.word_count as i64;
        let reading_seconds_delta = word_count_delta as f64 / effective_wpm(revised.wpm) * 60.0;
        let pause_seconds_delta = revised.pause_analysis.total_pause_seconds
            - original.pause_analysis.total_pause_seconds;

        Self {
            original_word_count: original.word_count,
            revised_word_count: revised.word_count,
            word_count_delta,
            reading_seconds_delta,
            pause_seconds_delta,
        }
    }
}

/// Segment and token tallies for a diff
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStats {
    pub added_segments: usize,
    pub removed_segments: usize,
    pub unchanged_segments: usize,
    /// Whitespace-separated words inside added segments
    pub added_words: usize,
    /// Whitespace-separated words inside removed segments
    pub removed_words: usize,
}

impl DiffStats {
    pub fn from_result(result: &ComparisonResult) -> Self {
        let mut stats = Self::default();

        let unchanged = |segments: &[DiffSegment]| {
            segments
                .iter()
                .filter(|s| s.kind == SegmentType::Unchanged)
                .count()
        };
        stats.unchanged_segments = unchanged(&result.revised_segments);

        for segment in &result.revised_segments {
            if segment.kind == SegmentType::Added {
                stats.added_segments += 1;
                stats.added_words += segment.value.split_whitespace().count();
            }
        }
        for segment in &result.original_segments {
            if segment.kind == SegmentType::Removed {
                stats.removed_segments += 1;
                stats.removed_words += segment.value.split_whitespace().count();
            }
        }

        stats
    }

    pub fn has_changes(&self) -> bool {
        self.added_segments > 0 || self.removed_segments > 0
    }
}
