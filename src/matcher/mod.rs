//! Glossary-based detection and translation of annotation text.
//!
//! The matcher runs every annotation through the [`Normalizer`], then asks
//! each [`MatchStrategy`] in turn for a translation. The first usable answer
//! wins; when none is usable the untranslated content is wrapped in a
//! fallback marker so callers can still tell it was processed.

pub mod chain;
pub mod options;
pub mod strategy;

pub use chain::{
    default_chain, CharacterSubstitution, CleanedContainment, ExactMatch, ExtractedContainment,
    SpacelessContainment,
};
pub use options::MatcherOptions;
pub use strategy::{MatchContext, MatchKind, MatchStrategy, TranslationResult};

use crate::glossary::Glossary;
use crate::normalizer::Normalizer;
use rayon::prelude::*;

/// Detects and translates annotation text using a [`Glossary`].
///
/// # Example
///
/// ```
/// use annotext::{Glossary, GlossaryMatcher};
///
/// let matcher = GlossaryMatcher::with_default_chain();
/// let glossary: Glossary = [("备 注", "備考")].into_iter().collect();
///
/// assert!(matcher.detect("备 注"));
/// let results = matcher.translate(&["备 注"], &glossary);
/// assert_eq!(results[0].translated_text, "備考");
/// ```
pub struct GlossaryMatcher {
    normalizer: Normalizer,
    strategies: Vec<Box<dyn MatchStrategy>>,
    options: MatcherOptions,
}

impl GlossaryMatcher {
    /// Creates a matcher with the given strategy chain and options.
    pub fn new(strategies: Vec<Box<dyn MatchStrategy>>, options: MatcherOptions) -> Self {
        Self {
            normalizer: Normalizer::new(),
            strategies,
            options,
        }
    }

    /// Creates a matcher with the standard chain and default options.
    pub fn with_default_chain() -> Self {
        Self::new(default_chain(), MatcherOptions::default())
    }

    /// Replaces the normalizer, e.g. one built with a custom rule set.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn options(&self) -> &MatcherOptions {
        &self.options
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Returns true if `text` carries meaningful Chinese content.
    pub fn detect(&self, text: &str) -> bool {
        let cleaned = self.normalizer.clean(text);
        self.normalizer.has_meaningful_script_content(&cleaned)
    }

    /// Keeps the texts that [`detect`](Self::detect) accepts, in order.
    pub fn filter<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        let kept: Vec<String> = texts
            .iter()
            .map(|text| -> &str { text.as_ref() })
            .filter(|text| self.detect(text))
            .map(str::to_string)
            .collect();

        log::info!("Detected Chinese in {} of {} texts", kept.len(), texts.len());
        kept
    }

    /// Translates every text, returning one result per input in input order.
    pub fn translate<S: AsRef<str>>(&self, texts: &[S], glossary: &Glossary) -> Vec<TranslationResult> {
        let results: Vec<TranslationResult> = texts
            .iter()
            .map(|text| self.translate_one(text.as_ref(), glossary))
            .collect();

        log_summary(&results);
        results
    }

    /// Like [`translate`](Self::translate), but items are processed on the
    /// rayon thread pool. Output order still matches input order.
    pub fn translate_parallel<S: AsRef<str> + Sync>(
        &self,
        texts: &[S],
        glossary: &Glossary,
    ) -> Vec<TranslationResult> {
        let results: Vec<TranslationResult> = texts
            .par_iter()
            .map(|text| self.translate_one(text.as_ref(), glossary))
            .collect();

        log_summary(&results);
        results
    }

    /// Translates a single annotation.
    pub fn translate_one(&self, text: &str, glossary: &Glossary) -> TranslationResult {
        let cleaned = self.normalizer.clean_source_script(text);
        let extracted = self.normalizer.extract_script_content(text);
        let ctx = MatchContext {
            source: text,
            cleaned: &cleaned,
            extracted: &extracted,
        };

        let matched = self.strategies.iter().find_map(|strategy| {
            strategy
                .resolve(&ctx, glossary)
                .filter(|translated| !translated.is_empty() && translated != &cleaned)
                .map(|translated| (strategy.kind(), translated))
        });

        let (translated_text, confidence, strategy) = match matched {
            Some((kind, translated)) => {
                log::debug!("'{}' -> '{}' ({})", text, translated, kind);
                (translated, self.options.confidence, Some(kind))
            }
            None => {
                let content = if extracted.is_empty() { &cleaned } else { &extracted };
                log::debug!("'{}' -> no glossary match, emitting fallback marker", text);
                (self.options.fallback_marker(content), 0.0, None)
            }
        };

        if let Some(delay) = self.options.item_delay {
            std::thread::sleep(delay);
        }

        TranslationResult {
            source_text: text.to_string(),
            cleaned_text: cleaned,
            extracted_chinese: extracted,
            translated_text,
            source_lang: self.options.source_lang.clone(),
            target_lang: self.options.target_lang.clone(),
            confidence,
            strategy,
        }
    }
}

impl Default for GlossaryMatcher {
    fn default() -> Self {
        Self::with_default_chain()
    }
}

fn log_summary(results: &[TranslationResult]) {
    let matched = results.iter().filter(|r| r.is_matched()).count();
    log::info!(
        "Translated {} texts: {} matched, {} fallback",
        results.len(),
        matched,
        results.len() - matched
    );
}
