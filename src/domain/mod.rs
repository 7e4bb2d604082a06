//! Pattern knowledge for CAD annotation text.
//!
//! This module holds the rules that recognise the pieces of a raw annotation
//! string: MTEXT control codes, Chinese script runs, unit-suffixed
//! measurements and whitespace layout. The [`crate::normalizer`] pipeline is
//! assembled from these building blocks.

pub mod format_codes;
pub mod measurement;
pub mod script;
pub mod spacing;

pub use format_codes::{FormatCodeMatcher, FormatRule, FormatRuleSet, RuleAction};
pub use measurement::MeasurementMatcher;
pub use script::ScriptRunMatcher;
pub use spacing::WhitespaceMatcher;

use regex::Regex;

/// Trait for pattern matching strategies.
pub trait PatternMatcher: Send + Sync {
    /// The regex that locates candidate spans.
    fn pattern(&self) -> &Regex;

    /// Returns every span of `text` this matcher recognises, in order.
    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Reduces `text` to this matcher's canonical form, or `None` when the
    /// text holds nothing the matcher recognises.
    fn normalize(&self, text: &str) -> Option<String>;

    /// Alternative spellings of a normalized value that should be treated
    /// as equivalent. The normalized value itself always comes first.
    fn generate_variants(&self, normalized: &str) -> Vec<String> {
        vec![normalized.to_string()]
    }
}
