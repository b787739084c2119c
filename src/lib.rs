/*!
 * # voscript - script timing for voice actors
 *
 * A Rust library for estimating how long a script takes to read aloud and
 * how it changed between revisions.
 *
 * ## Features
 *
 * - Spoken word counts: numbers, dates, currencies, percentages, measurements
 *   and optionally URLs are spelled out before counting
 * - Pause detection from punctuation, formatting and stage directions
 * - Reading-time estimates at a configurable speed
 * - Word-level diffs between two revisions, with timing deltas
 * - Job quotes per word, per minute or per project
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `analysis`: the pure text engine:
 *   - `analysis::tokenizer`: word/whitespace tokenization
 *   - `analysis::diff`: LCS comparison of two revisions
 *   - `analysis::normalizer`: spoken-form rewrite pipeline and word count
 *   - `analysis::pauses`: pause heuristics
 *   - `analysis::timing`: reading time and duration formatting
 * - `app_config`: Configuration management
 * - `pricing`: Quote calculation
 * - `cache`: Analysis cache
 * - `worker`: Debounced background diffing
 * - `report`: Text and JSON rendering
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod analysis;
pub mod app_config;
pub mod app_controller;
pub mod cache;
pub mod errors;
pub mod file_utils;
pub mod pricing;
pub mod report;
pub mod worker;

// Re-export main types for easier usage
pub use analysis::{
    calculate_spoken_word_count, compare_texts, detect_pauses, format_duration, tokenize,
    ComparisonResult, ExpansionOptions, PauseAnalysis, ScriptAnalysis,
};
pub use app_config::Config;
pub use errors::{AppError, ConfigError, ScriptError};
pub use pricing::{calculate_quote, PricingConfig, PricingModel, QuoteResult};
pub use worker::{DiffOutcome, DiffWorker};
