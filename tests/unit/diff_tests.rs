/*!
 * Property tests for the diff engine
 */

use voscript::analysis::{compare_texts, tokenize, DiffSegment, SegmentType};

use crate::common;

fn concat(segments: &[DiffSegment]) -> String {
    segments.iter().map(|s| s.value.as_str()).collect()
}

fn assert_well_formed(original: &str, revised: &str) {
    let result = compare_texts(original, revised);

    assert_eq!(concat(&result.original_segments), original);
    assert_eq!(concat(&result.revised_segments), revised);

    for side in [&result.original_segments, &result.revised_segments] {
        for pair in side.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "adjacent segments share a type");
        }
        assert!(side.iter().all(|s| !s.value.is_empty()));
    }

    assert!(result
        .original_segments
        .iter()
        .all(|s| s.kind != SegmentType::Added));
    assert!(result
        .revised_segments
        .iter()
        .all(|s| s.kind != SegmentType::Removed));
}

#[test]
fn test_compareTexts_withVariedInputs_shouldReconstructBothSides() {
    let cases = [
        ("", ""),
        ("", "hello"),
        ("hello", ""),
        (common::DRAFT_SCRIPT, common::FINAL_SCRIPT),
        ("  leading and trailing  ", "leading and trailing"),
        ("line one\nline two", "line one\n\nline two"),
        ("café au lait", "café noir"),
        ("a a a a", "a b a b"),
        (common::SAMPLE_SCRIPT, common::DRAFT_SCRIPT),
    ];

    for (original, revised) in cases {
        assert_well_formed(original, revised);
    }
}

#[test]
fn test_compareTexts_withEmptyOriginal_shouldMarkEverythingAdded() {
    let result = compare_texts("", "hello");
    assert!(result.original_segments.is_empty());
    assert_eq!(
        result.revised_segments,
        vec![DiffSegment::new("hello", SegmentType::Added)]
    );
}

#[test]
fn test_compareTexts_withEmptyRevised_shouldMarkEverythingRemoved() {
    let result = compare_texts("goodbye cruel world", "");
    assert!(result.revised_segments.is_empty());
    assert_eq!(
        result.original_segments,
        vec![DiffSegment::new("goodbye cruel world", SegmentType::Removed)]
    );
}

#[test]
fn test_compareTexts_withSameText_shouldReturnSingleUnchangedSegment() {
    let result = compare_texts(common::SAMPLE_SCRIPT, common::SAMPLE_SCRIPT);
    assert_eq!(
        result.original_segments,
        vec![DiffSegment::new(common::SAMPLE_SCRIPT, SegmentType::Unchanged)]
    );
    assert_eq!(result.original_segments, result.revised_segments);
    assert!(result.is_identical());
}

#[test]
fn test_compareTexts_withScriptRevision_shouldIsolateChangedWords() {
    let result = compare_texts(common::DRAFT_SCRIPT, common::FINAL_SCRIPT);

    let removed: Vec<&str> = result
        .original_segments
        .iter()
        .filter(|s| s.kind == SegmentType::Removed)
        .map(|s| s.value.trim())
        .collect();
    let added: Vec<&str> = result
        .revised_segments
        .iter()
        .filter(|s| s.kind == SegmentType::Added)
        .map(|s| s.value.trim())
        .collect();

    assert_eq!(removed, vec!["coffee."]);
    assert_eq!(added, vec!["back", "tea."]);
}

#[test]
fn test_compareTexts_unchangedTokens_shouldMatchOnBothSides() {
    let result = compare_texts("one two three four", "zero two four five");

    let unchanged = |segments: &[DiffSegment]| -> Vec<String> {
        segments
            .iter()
            .filter(|s| s.kind == SegmentType::Unchanged)
            .flat_map(|s| tokenize(&s.value).into_iter().map(|t| t.text.to_string()).collect::<Vec<_>>())
            .collect()
    };

    assert_eq!(
        unchanged(&result.original_segments),
        unchanged(&result.revised_segments)
    );
}
