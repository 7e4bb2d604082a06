//! Whitespace layout of annotation text.
//!
//! Drawings space out short labels to fill table cells (`备 注`,
//! `总   页`), so lookups have to try the same phrase with its spacing
//! removed or collapsed.

use super::PatternMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matcher for whitespace runs.
#[derive(Debug, Clone, Default)]
pub struct WhitespaceMatcher;

impl WhitespaceMatcher {
    /// Creates a new whitespace matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"\s+").expect("Valid whitespace regex"));
        &PATTERN
    }

    /// Collapses every whitespace run to one ASCII space and trims the ends.
    pub fn collapse(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Removes ASCII spaces only; other whitespace is kept.
    pub fn remove_spaces(text: &str) -> String {
        text.replace(' ', "")
    }
}

impl PatternMatcher for WhitespaceMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    fn normalize(&self, text: &str) -> Option<String> {
        let collapsed = Self::collapse(text);
        if collapsed.is_empty() {
            None
        } else {
            Some(collapsed)
        }
    }

    /// Returns `[text, text without spaces, text with collapsed whitespace]`.
    ///
    /// Always three entries, so callers can interleave variants of several
    /// strings by position.
    fn generate_variants(&self, normalized: &str) -> Vec<String> {
        vec![
            normalized.to_string(),
            Self::remove_spaces(normalized),
            Self::collapse(normalized),
        ]
    }
}
