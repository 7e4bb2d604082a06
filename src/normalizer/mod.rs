//! Annotation text normalization.
//!
//! Turns a raw annotation string into a readable cleaned string and
//! extracts the Chinese runs it carries.
//!
//! # Pipeline
//!
//! 1. Control characters are stripped
//! 2. The MTEXT [`FormatRuleSet`] removes formatting codes
//! 3. Punctuation is normalized and whitespace collapsed
//! 4. Measurements split by earlier stages are rejoined
//!
//! The whole pipeline repeats until the text stops changing, so cleaning is
//! idempotent.

pub mod stages;

use crate::domain::script::{count_core_ideographs, is_fullwidth, is_source_script};
use crate::domain::{FormatRuleSet, MeasurementMatcher, PatternMatcher, ScriptRunMatcher};
use serde::Serialize;

/// Upper bound on pipeline repetitions; real inputs settle in two or three.
const MAX_PASSES: usize = 16;

/// Minimum number of core ideographs for text to count as Chinese.
pub const MEANINGFUL_IDEOGRAPH_FLOOR: usize = 2;

/// Characters of a cleaned string partitioned by script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptSplit {
    /// Ideographs and full-width punctuation
    pub source: String,
    /// Everything else
    pub other: String,
}

/// Cleans raw annotation text and extracts its Chinese content.
///
/// # Example
///
/// ```
/// use annotext::Normalizer;
///
/// let normalizer = Normalizer::new();
/// assert_eq!(normalizer.clean(r"{\fSimSun|b0;备注}\P45 min"), "备注 45min");
/// assert!(normalizer.has_meaningful_script_content("备 注"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: FormatRuleSet,
}

impl Normalizer {
    /// Creates a normalizer with the standard MTEXT rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer that uses a custom rule set.
    pub fn with_rules(rules: FormatRuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &FormatRuleSet {
        &self.rules
    }

    /// Removes formatting codes and normalizes punctuation and spacing.
    pub fn clean(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let cleaned = settle(text, |current| self.clean_pass(current));
        log::trace!("clean: '{}' -> '{}'", text, cleaned);
        cleaned
    }

    fn clean_pass(&self, text: &str) -> String {
        let text = stages::strip_control_chars(text);
        let text = self.rules.apply(&text);
        let text = stages::normalize_punctuation(&text);
        MeasurementMatcher::repair(&text)
    }

    /// Like [`clean`](Self::clean), but also rejoins ASCII alphanumerics
    /// that ended up separated from adjacent ideographs by a space.
    pub fn clean_source_script(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        settle(&self.clean(text), |current| {
            self.clean(&stages::rejoin_mixed_script(current))
        })
    }

    /// Extracts the ideographic runs of the cleaned text, joined by single
    /// spaces.
    ///
    /// When no run is found the cleaned text is returned unchanged, so a
    /// result equal to the cleaned input means "nothing extracted".
    pub fn extract_script_content(&self, text: &str) -> String {
        let cleaned = self.clean(text);
        ScriptRunMatcher::new()
            .normalize(&cleaned)
            .unwrap_or(cleaned)
    }

    /// True if the extracted content holds at least
    /// [`MEANINGFUL_IDEOGRAPH_FLOOR`] core ideographs.
    pub fn has_meaningful_script_content(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        count_core_ideographs(&self.extract_script_content(text)) >= MEANINGFUL_IDEOGRAPH_FLOOR
    }

    /// Partitions the cleaned text into Chinese and non-Chinese characters.
    pub fn split_by_script(&self, text: &str) -> ScriptSplit {
        let cleaned = self.clean(text);
        let (source, other): (String, String) = cleaned
            .chars()
            .partition(|&c| is_source_script(c) || is_fullwidth(c));

        ScriptSplit {
            source: source.trim().to_string(),
            other: other.trim().to_string(),
        }
    }
}

/// Applies `pass` until its output equals its input.
fn settle(text: &str, pass: impl Fn(&str) -> String) -> String {
    let mut current = text.to_string();
    for _ in 0..MAX_PASSES {
        let next = pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}
