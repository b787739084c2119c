/*!
 * Tests for spoken word counting through the public API
 */

use voscript::analysis::normalizer::clean_spoken_text;
use voscript::analysis::{ExpansionKind, ExpansionOptions, NormalizerPipeline, StageKind};
use voscript::calculate_spoken_word_count;

use crate::common;

#[test]
fn test_spokenWordCount_withDocumentedExamples_shouldMatch() {
    let defaults = ExpansionOptions::default();
    assert_eq!(calculate_spoken_word_count("", &defaults), 0);
    assert_eq!(calculate_spoken_word_count("10,000 dollars", &defaults), 3);

    let currencies = ExpansionOptions::none().with(ExpansionKind::Currencies, true);
    assert_eq!(calculate_spoken_word_count("$1,250", &currencies), 6);

    let percentages = ExpansionOptions::none().with(ExpansionKind::Percentages, true);
    assert_eq!(calculate_spoken_word_count("50%", &percentages), 2);
}

#[test]
fn test_spokenWordCount_withSampleScript_shouldExpandAndDropUrl() {
    // Introducing the new Aurora blender / Only forty-nine point ninety-nine
    // dollars / for a limited time / that's thirty percent off / Visit today
    // beat Aurora blend better
    let count = calculate_spoken_word_count(common::SAMPLE_SCRIPT, &ExpansionOptions::default());
    assert_eq!(count, 24);
}

#[test]
fn test_spokenWordCount_withUrlExpansion_shouldCountUrlParts() {
    let options = ExpansionOptions::default().with(ExpansionKind::Urls, true);
    let without = calculate_spoken_word_count(common::SAMPLE_SCRIPT, &ExpansionOptions::default());
    let with = calculate_spoken_word_count(common::SAMPLE_SCRIPT, &options);
    // www dot aurora dot com
    assert_eq!(with - without, 5);
}

#[test]
fn test_spokenWordCount_withCurrencyDisabled_shouldStillSpellNumber() {
    let options = ExpansionOptions::default().with(ExpansionKind::Currencies, false);
    let pipeline = NormalizerPipeline::from_options(&options);
    assert_eq!(pipeline.normalize("Only $20"), "Only twenty");
}

#[test]
fn test_spokenWordCount_withCurrencyBeforePercent_shouldKeepBothUnits() {
    let pipeline = NormalizerPipeline::from_options(&ExpansionOptions::default());
    assert_eq!(
        pipeline.normalize("Save $5 or 10%"),
        "Save five dollars or ten percent"
    );
}

#[test]
fn test_pipeline_withReorderedStages_shouldChangeOutput() {
    let mut pipeline = NormalizerPipeline::from_options(&ExpansionOptions::default());
    pipeline.move_stage(StageKind::Numbers, 1);
    // Numbers now run before percentages, so the sign is stripped by cleanup
    assert_eq!(pipeline.normalize("50%"), "fifty");
}

#[test]
fn test_cleanSpokenText_shouldStripPunctuationAndCollapseWhitespace() {
    assert_eq!(clean_spoken_text("Well...  I -- don't\n\nknow!"), "Well I dont know");
    assert_eq!(clean_spoken_text("snake_case"), "snakecase");
}
