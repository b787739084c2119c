/*!
 * Report rendering for the command line.
 *
 * Each view has a plain-text form for terminals and a JSON form for other
 * tools. Rendering is pure; printing and file output happen in the caller.
 */

use anyhow::{Context, Result};
use serde::Serialize;

use crate::analysis::{
    tokenize, ComparisonResult, ComparisonStats, DiffSegment, DiffStats, ExpansionKind,
    ExpansionOptions, ScriptAnalysis, SegmentType,
};
use crate::pricing::{format_currency, QuoteResult};

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Analysis of one script file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub source: String,
    #[serde(flatten)]
    pub analysis: ScriptAnalysis,
}

/// Comparison of two script files
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareReport {
    pub original: ScriptAnalysis,
    pub revised: ScriptAnalysis,
    pub comparison: ComparisonResult,
    pub stats: ComparisonStats,
    pub diff_stats: DiffStats,
}

/// Pretty-printed JSON for any report
pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

pub fn render_analysis_text(report: &AnalysisReport) -> String {
    let analysis = &report.analysis;
    let mut out = String::new();

    out.push_str(&format!("Script: {}\n", report.source));
    out.push_str(&format!("  Spoken words:   {}\n", analysis.word_count));
    out.push_str(&format!("  Reading speed:  {} WPM\n", analysis.wpm));
    out.push_str(&format!("  Reading time:   {}\n", analysis.reading_time));
    out.push_str(&format!(
        "  Pauses:         {} ({:.1}s)\n",
        analysis.pause_analysis.count, analysis.pause_analysis.total_pause_seconds
    ));
    for entry in analysis.pause_analysis.summary() {
        out.push_str(&format!(
            "    {:<18} {:>4} x  {:.1}s\n",
            entry.kind.display_name(),
            entry.count,
            entry.total_seconds
        ));
    }
    out.push_str(&format!("  Total time:     {}\n", analysis.total_time));

    out
}

/// Merge both sides of a comparison into one inline view.
///
/// Removed text is wrapped as `[-text-]` and added text as `{+text+}`;
/// unchanged text appears once.
pub fn render_inline_diff(result: &ComparisonResult) -> String {
    let original = tagged_tokens(&result.original_segments);
    let revised = tagged_tokens(&result.revised_segments);

    let mut out = String::new();
    let (mut i, mut j) = (0, 0);

    while i < original.len() || j < revised.len() {
        let removed_start = i;
        while i < original.len() && original[i].0 == SegmentType::Removed {
            i += 1;
        }
        let added_start = j;
        while j < revised.len() && revised[j].0 == SegmentType::Added {
            j += 1;
        }

        push_marked(&mut out, "[-", &original[removed_start..i], "-]");
        push_marked(&mut out, "{+", &revised[added_start..j], "+}");

        // Both cursors now sit on the same unchanged token
        match (original.get(i), revised.get(j)) {
            (Some((_, text)), Some(_)) => {
                out.push_str(text);
                i += 1;
                j += 1;
            }
            (Some((_, text)), None) => {
                out.push_str(text);
                i += 1;
            }
            (None, Some((_, text))) => {
                out.push_str(text);
                j += 1;
            }
            (None, None) => {}
        }
    }

    out
}

fn tagged_tokens(segments: &[DiffSegment]) -> Vec<(SegmentType, &str)> {
    segments
        .iter()
        .flat_map(|segment| {
            tokenize(&segment.value)
                .into_iter()
                .map(move |token| (segment.kind, token.text))
        })
        .collect()
}

fn push_marked(out: &mut String, open: &str, tokens: &[(SegmentType, &str)], close: &str) {
    if tokens.is_empty() {
        return;
    }
    out.push_str(open);
    for (_, text) in tokens {
        out.push_str(text);
    }
    out.push_str(close);
}

fn signed(value: f64, precision: usize) -> String {
    if value > 0.0 {
        format!("+{:.*}", precision, value)
    } else {
        format!("{:.*}", precision, value)
    }
}

pub fn render_compare_text(report: &CompareReport) -> String {
    let mut out = String::new();

    out.push_str(&render_inline_diff(&report.comparison));
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');

    let stats = &report.stats;
    out.push_str(&format!(
        "Words:        {} -> {} ({})\n",
        stats.original_word_count,
        stats.revised_word_count,
        signed(stats.word_count_delta as f64, 0)
    ));
    out.push_str(&format!(
        "Reading time: {} -> {} ({}s)\n",
        report.original.reading_time,
        report.revised.reading_time,
        signed(stats.reading_seconds_delta, 1)
    ));
    out.push_str(&format!(
        "Pause time:   {:.1}s -> {:.1}s ({}s)\n",
        report.original.pause_analysis.total_pause_seconds,
        report.revised.pause_analysis.total_pause_seconds,
        signed(stats.pause_seconds_delta, 1)
    ));
    out.push_str(&format!(
        "Total time:   {} -> {}\n",
        report.original.total_time, report.revised.total_time
    ));

    let diff = &report.diff_stats;
    if diff.has_changes() {
        out.push_str(&format!(
            "Changes:      {} added ({} words), {} removed ({} words)\n",
            diff.added_segments, diff.added_words, diff.removed_segments, diff.removed_words
        ));
    } else {
        out.push_str("Changes:      none\n");
    }

    out
}

pub fn render_quote_text(quote: &QuoteResult) -> String {
    let mut out = String::new();

    out.push_str(&format!("Pricing model:  {}\n", quote.pricing_model));
    out.push_str(&format!("Spoken words:   {}\n", quote.word_count));
    out.push_str(&format!("Reading time:   {}\n", quote.reading_time));
    out.push_str(&format!("Base price:     {}\n", format_currency(quote.base_price)));
    if quote.includes_minimum_fee {
        out.push_str(&format!(
            "Final price:    {} (minimum fee applied)\n",
            format_currency(quote.final_price)
        ));
    } else {
        out.push_str(&format!("Final price:    {}\n", format_currency(quote.final_price)));
    }
    out.push_str(&format!("With revisions: {}\n", format_currency(quote.revision_price)));

    out
}

/// One line per expansion toggle with its state and an example
pub fn render_expansions_text(options: &ExpansionOptions) -> String {
    let mut out = String::new();
    for kind in ExpansionKind::ALL {
        let state = if options.is_enabled(kind) { "on" } else { "off" };
        out.push_str(&format!("{:<13} {:<4} {}\n", kind.label(), state, kind.example()));
    }
    out
}
