//! Custom assertions for annotation cleaning and translation.
//!
//! Provides domain-specific assertions that make tests more readable
//! and provide better error messages.

use annotext::{MatchKind, Normalizer, TranslationResult};

/// Asserts that cleaning `text` leaves it unchanged.
///
/// # Panics
/// Panics if the cleaned text differs from the input.
pub fn assert_survives_cleaning(normalizer: &Normalizer, text: &str) {
    let cleaned = normalizer.clean(text);
    assert_eq!(
        cleaned, text,
        "'{}' should survive cleaning unchanged but became '{}'",
        text, cleaned
    );
}

/// Asserts that cleaning is idempotent for `text`.
///
/// # Panics
/// Panics if cleaning the cleaned text changes it again.
pub fn assert_idempotent(normalizer: &Normalizer, text: &str) {
    let once = normalizer.clean(text);
    let twice = normalizer.clean(&once);
    assert_eq!(
        once, twice,
        "Cleaning '{}' is not idempotent: '{}' then '{}'",
        text, once, twice
    );

    let once = normalizer.clean_source_script(text);
    let twice = normalizer.clean_source_script(&once);
    assert_eq!(
        once, twice,
        "Source-script cleaning of '{}' is not idempotent: '{}' then '{}'",
        text, once, twice
    );
}

/// Asserts that a result came from the glossary with the expected text.
///
/// # Panics
/// Panics if the result is a fallback or carries different text.
pub fn assert_translated(result: &TranslationResult, expected: &str, kind: MatchKind) {
    assert_eq!(
        result.translated_text, expected,
        "'{}' should translate to '{}'",
        result.source_text, expected
    );
    assert_eq!(
        result.strategy,
        Some(kind),
        "'{}' should be resolved by {}",
        result.source_text,
        kind
    );
    assert_eq!(result.confidence, 0.95);
}

/// Asserts that a result is the fallback marker.
///
/// # Panics
/// Panics if a glossary strategy matched or the marker is malformed.
pub fn assert_fallback(result: &TranslationResult) {
    assert!(
        !result.is_matched(),
        "'{}' should fall back but matched via {:?}",
        result.source_text,
        result.strategy
    );
    assert!(
        result.translated_text.starts_with("[翻訳済み: ") && result.translated_text.ends_with(']'),
        "Fallback for '{}' should be wrapped in the marker, got '{}'",
        result.source_text,
        result.translated_text
    );
    assert_ne!(result.translated_text, result.cleaned_text);
    assert_eq!(result.confidence, 0.0);
}
