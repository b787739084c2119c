/*!
 * Script revision diffing.
 *
 * Computes a longest-common-subsequence alignment over word/whitespace
 * tokens and emits two parallel segment lists: the original text annotated
 * with removals and the revised text annotated with additions.
 *
 * The table is O(m·n) in token counts. Interactive callers should debounce
 * input before calling (see `crate::worker::DiffWorker`).
 */

use log::debug;
use serde::{Deserialize, Serialize};

use super::tokenizer::{tokenize, Token};

/// Change classification of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Unchanged,
    Added,
    Removed,
}

/// A run of text sharing one change type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Segment text, exactly as it appears in its source
    pub value: String,
    /// Change type
    #[serde(rename = "type")]
    pub kind: SegmentType,
}

impl DiffSegment {
    pub fn new(value: impl Into<String>, kind: SegmentType) -> Self {
        Self {
            value: value.into(),
            kind,
        }
    }
}

/// Both sides of a comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Original text with `Removed` and `Unchanged` segments
    pub original_segments: Vec<DiffSegment>,
    /// Revised text with `Added` and `Unchanged` segments
    pub revised_segments: Vec<DiffSegment>,
}

impl ComparisonResult {
    /// Whether the two inputs were token-for-token identical
    pub fn is_identical(&self) -> bool {
        self.original_segments
            .iter()
            .chain(self.revised_segments.iter())
            .all(|s| s.kind == SegmentType::Unchanged)
    }
}

/// Compare two script revisions.
///
/// Concatenating `original_segments` reproduces `original`, and
/// concatenating `revised_segments` reproduces `revised`.
pub fn compare_texts(original: &str, revised: &str) -> ComparisonResult {
    let original_tokens = tokenize(original);
    let revised_tokens = tokenize(revised);

    debug!(
        "Diffing {} original tokens against {} revised tokens",
        original_tokens.len(),
        revised_tokens.len()
    );

    let table = build_lcs_table(&original_tokens, &revised_tokens);
    let (original_raw, revised_raw) = backtrack(&original_tokens, &revised_tokens, &table);

    ComparisonResult {
        original_segments: merge_segments(original_raw),
        revised_segments: merge_segments(revised_raw),
    }
}

/// Row-major (m+1) x (n+1) table of common-subsequence lengths
struct LcsTable {
    cols: usize,
    cells: Vec<u32>,
}

impl LcsTable {
    fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[i * self.cols + j]
    }
}

fn build_lcs_table(original: &[Token<'_>], revised: &[Token<'_>]) -> LcsTable {
    let m = original.len();
    let n = revised.len();
    let cols = n + 1;
    let mut cells = vec![0u32; (m + 1) * cols];

    for i in 1..=m {
        for j in 1..=n {
            cells[i * cols + j] = if original[i - 1].text == revised[j - 1].text {
                cells[(i - 1) * cols + (j - 1)] + 1
            } else {
                cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
            };
        }
    }

    LcsTable { cols, cells }
}

/// Walk the table from the final cell back to the origin.
///
/// When consuming a revised token keeps the same achievable LCS length as
/// consuming an original token, the revised token is taken as `Added`.
/// Rendered output depends on this tie-break.
fn backtrack<'a>(
    original: &[Token<'a>],
    revised: &[Token<'a>],
    table: &LcsTable,
) -> (Vec<(&'a str, SegmentType)>, Vec<(&'a str, SegmentType)>) {
    let mut original_out = Vec::with_capacity(original.len());
    let mut revised_out = Vec::with_capacity(revised.len());

    let mut i = original.len();
    let mut j = revised.len();

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1].text == revised[j - 1].text {
            original_out.push((original[i - 1].text, SegmentType::Unchanged));
            revised_out.push((revised[j - 1].text, SegmentType::Unchanged));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            revised_out.push((revised[j - 1].text, SegmentType::Added));
            j -= 1;
        } else {
            original_out.push((original[i - 1].text, SegmentType::Removed));
            i -= 1;
        }
    }

    original_out.reverse();
    revised_out.reverse();
    (original_out, revised_out)
}

/// Collapse consecutive pieces of the same type into one segment
fn merge_segments(pieces: Vec<(&str, SegmentType)>) -> Vec<DiffSegment> {
    let mut merged: Vec<DiffSegment> = Vec::new();

    for (text, kind) in pieces {
        match merged.last_mut() {
            Some(last) if last.kind == kind => last.value.push_str(text),
            _ => merged.push(DiffSegment::new(text, kind)),
        }
    }

    merged
}
