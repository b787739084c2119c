/*!
 * Script analysis engine.
 *
 * Pure, synchronous transformations over script text:
 * - `tokenizer`: lossless word/whitespace tokenization
 * - `diff`: LCS-based comparison of two script revisions
 * - `spoken_numbers`: cardinal number spelling
 * - `expansion`: which literal forms get spelled out before counting
 * - `normalizer`: ordered rewrite pipeline producing the spoken word count
 * - `pauses`: punctuation and formatting pause heuristics
 * - `timing`: reading-time arithmetic and duration formatting
 * - `comparison`: side-by-side statistics for two revisions
 *
 * Nothing in this module performs I/O or returns an error; every function is
 * total over its input.
 */

pub mod tokenizer;
pub mod diff;
pub mod spoken_numbers;
pub mod expansion;
pub mod normalizer;
pub mod pauses;
pub mod timing;
pub mod comparison;

// Re-export main types
pub use tokenizer::{tokenize, Token, TokenKind};
pub use diff::{compare_texts, ComparisonResult, DiffSegment, SegmentType};
pub use expansion::{ExpansionKind, ExpansionOptions};
pub use normalizer::{calculate_spoken_word_count, NormalizerPipeline, StageKind};
pub use pauses::{detect_pauses, PauseAnalysis, PauseEvent, PauseType};
pub use timing::{format_duration, ScriptAnalysis};
pub use comparison::{ComparisonStats, DiffStats};
