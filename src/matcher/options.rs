//! Matcher configuration.

use std::time::Duration;

/// Default prefix of the fallback marker.
pub const FALLBACK_PREFIX: &str = "[翻訳済み: ";

/// Default suffix of the fallback marker.
pub const FALLBACK_SUFFIX: &str = "]";

/// Confidence reported for every glossary match.
pub const MATCH_CONFIDENCE: f32 = 0.95;

/// Configuration for [`GlossaryMatcher`](super::GlossaryMatcher).
#[derive(Debug, Clone, PartialEq)]
pub struct MatcherOptions {
    /// Text placed before the untranslated content in the fallback marker
    pub fallback_prefix: String,
    /// Text placed after the untranslated content in the fallback marker
    pub fallback_suffix: String,
    /// Confidence reported for matched results (fallbacks report 0.0)
    pub confidence: f32,
    /// Language tag written into results as the source language
    pub source_lang: String,
    /// Language tag written into results as the target language
    pub target_lang: String,
    /// Simulated per-item latency, applied after each item is resolved
    pub item_delay: Option<Duration>,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            fallback_prefix: FALLBACK_PREFIX.to_string(),
            fallback_suffix: FALLBACK_SUFFIX.to_string(),
            confidence: MATCH_CONFIDENCE,
            source_lang: "ZH".to_string(),
            target_lang: "JA".to_string(),
            item_delay: None,
        }
    }
}

impl MatcherOptions {
    /// Sets the fallback marker delimiters.
    pub fn with_fallback_marker(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.fallback_prefix = prefix.into();
        self.fallback_suffix = suffix.into();
        self
    }

    /// Sets the match confidence, clamped to `[0, 1]`.
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Sets the language tags written into results.
    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_lang = source.into();
        self.target_lang = target.into();
        self
    }

    /// Adds a simulated per-item delay.
    pub fn with_item_delay(mut self, delay: Duration) -> Self {
        self.item_delay = Some(delay);
        self
    }

    /// Wraps untranslated content in the fallback marker.
    pub fn fallback_marker(&self, content: &str) -> String {
        format!("{}{}{}", self.fallback_prefix, content, self.fallback_suffix)
    }
}
