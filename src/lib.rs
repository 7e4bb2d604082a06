//! Cleaning, detection and glossary translation of CAD annotation text.
//!
//! Text pulled out of engineering drawings is full of MTEXT formatting codes,
//! stray punctuation and broken spacing. This library turns such strings into
//! readable text, decides whether they carry Chinese content worth
//! translating, and resolves a Japanese rendering through a curated glossary.
//!
//! # Features
//!
//! - **MTEXT Cleaning**: Removes font, height, color, stacking and paragraph codes
//! - **Measurement Preservation**: Values such as `45min`, `80℃` or `Ø50` survive cleaning
//! - **Script Detection**: Extracts Chinese runs and applies a two-ideograph floor
//! - **Glossary Matching**: Exact, partial and per-character strategies with a fallback marker
//! - **Parallel Batches**: Order-preserving translation on the rayon thread pool
//!
//! # Architecture
//!
//! - [`domain`]: Pattern knowledge (format codes, script runs, measurements, spacing)
//! - [`normalizer`]: The cleaning pipeline built on the domain matchers
//! - [`glossary`]: Ordered phrase glossaries and the built-in CAD glossary
//! - [`matcher`]: Detection and the translation strategy chain
//! - [`error`]: Error handling for the fallible edges
//!
//! # Quick Start
//!
//! ```
//! use annotext::{build_glossary, GlossaryMatcher};
//!
//! let matcher = GlossaryMatcher::with_default_chain();
//! let glossary = build_glossary();
//!
//! let texts = [r"{\fSimSun|b0;备 注}", "LAYER 0"];
//! let kept = matcher.filter(&texts);
//! assert_eq!(kept.len(), 1);
//!
//! let results = matcher.translate(&kept, &glossary);
//! assert_eq!(results[0].translated_text, "備考");
//! ```
//!
//! # Examples
//!
//! ## Cleaning
//!
//! ```
//! use annotext::Normalizer;
//!
//! let normalizer = Normalizer::new();
//! assert_eq!(normalizer.clean(r"烘干温度：80%%dC"), "烘干温度 80°C");
//! assert_eq!(normalizer.extract_script_content("线宽 0.5mm"), "线宽");
//! ```
//!
//! ## Loading a user glossary
//!
//! ```no_run
//! use annotext::{Glossary, GlossaryMatcher};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut glossary = Glossary::builtin().clone();
//! glossary.merge(&Glossary::load(Path::new("project_terms.json"))?);
//!
//! let results = GlossaryMatcher::default().translate(&["喷漆室"], &glossary);
//! println!("{}", results[0].translated_text);
//! # Ok(())
//! # }
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod glossary;
pub mod matcher;
pub mod normalizer;

// Re-exports for convenient access
pub use domain::{FormatCodeMatcher, FormatRule, FormatRuleSet, PatternMatcher, RuleAction};
pub use error::{AnnotextError, AnnotextResult};
pub use glossary::{build_glossary, Glossary};
pub use matcher::{GlossaryMatcher, MatchKind, MatchStrategy, MatcherOptions, TranslationResult};
pub use normalizer::{Normalizer, ScriptSplit};

use once_cell::sync::Lazy;

static DEFAULT_MATCHER: Lazy<GlossaryMatcher> = Lazy::new(GlossaryMatcher::with_default_chain);

/// Returns true if `text` carries meaningful Chinese content.
///
/// Shorthand for [`GlossaryMatcher::detect`] on a shared default matcher.
pub fn detect(text: &str) -> bool {
    DEFAULT_MATCHER.detect(text)
}

/// Keeps the texts that [`detect`] accepts, in order.
pub fn filter<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    DEFAULT_MATCHER.filter(texts)
}

/// Translates `texts` with the default strategy chain.
pub fn translate<S: AsRef<str>>(texts: &[S], glossary: &Glossary) -> Vec<TranslationResult> {
    DEFAULT_MATCHER.translate(texts, glossary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert!(detect("备 注"));
        assert!(!detect(""));
        assert_eq!(filter(&["备 注", "A-001"]), vec!["备 注"]);

        let results = translate(&["备 注"], Glossary::builtin());
        assert_eq!(results[0].translated_text, "備考");
    }

    #[test]
    fn test_default_matcher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GlossaryMatcher>();
        assert_send_sync::<Glossary>();
    }
}
