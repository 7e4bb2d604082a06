//! The glossary strategies, in the order the matcher tries them.
//!
//! Partial strategies replace only the first occurrence of the matched key;
//! a phrase that appears twice is translated once.

use super::strategy::{MatchContext, MatchKind, MatchStrategy};
use crate::domain::{PatternMatcher, WhitespaceMatcher};
use crate::glossary::Glossary;

/// Builds the standard chain: exact, cleaned containment, spaceless
/// containment, extracted containment, character substitution.
pub fn default_chain() -> Vec<Box<dyn MatchStrategy>> {
    vec![
        Box::new(ExactMatch),
        Box::new(CleanedContainment),
        Box::new(SpacelessContainment),
        Box::new(ExtractedContainment),
        Box::new(CharacterSubstitution),
    ]
}

/// Looks up whole-text spellings of the annotation.
///
/// Candidates are the raw, cleaned and extracted texts, then each of them
/// without spaces, then each with collapsed whitespace. The raw text comes
/// first so an entry written with its original formatting always wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl ExactMatch {
    pub fn candidates(ctx: &MatchContext<'_>) -> Vec<String> {
        let spacing = WhitespaceMatcher::new();
        let variants: Vec<Vec<String>> = [ctx.source, ctx.cleaned, ctx.extracted]
            .iter()
            .map(|text| spacing.generate_variants(text))
            .collect();

        (0..3)
            .flat_map(|i| variants.iter().map(move |v| v[i].clone()))
            .collect()
    }
}

impl MatchStrategy for ExactMatch {
    fn resolve(&self, ctx: &MatchContext<'_>, glossary: &Glossary) -> Option<String> {
        Self::candidates(ctx)
            .into_iter()
            .filter(|candidate| !candidate.is_empty())
            .find_map(|candidate| glossary.get(&candidate).map(str::to_string))
    }

    fn kind(&self) -> MatchKind {
        MatchKind::Exact
    }
}

/// First glossary key contained in the cleaned text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanedContainment;

impl MatchStrategy for CleanedContainment {
    fn resolve(&self, ctx: &MatchContext<'_>, glossary: &Glossary) -> Option<String> {
        glossary
            .iter()
            .find(|(key, _)| !key.is_empty() && ctx.cleaned.contains(key))
            .map(|(key, value)| ctx.cleaned.replacen(key, value, 1))
    }

    fn kind(&self) -> MatchKind {
        MatchKind::CleanedContainment
    }
}

/// Like [`CleanedContainment`], but spaces are ignored when testing for
/// containment. The replacement still uses the original key on the
/// original cleaned text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacelessContainment;

impl MatchStrategy for SpacelessContainment {
    fn resolve(&self, ctx: &MatchContext<'_>, glossary: &Glossary) -> Option<String> {
        let cleaned = WhitespaceMatcher::remove_spaces(ctx.cleaned);
        glossary
            .iter()
            .find(|(key, _)| {
                let key = WhitespaceMatcher::remove_spaces(key);
                !key.is_empty() && cleaned.contains(&key)
            })
            .map(|(key, value)| ctx.cleaned.replacen(key, value, 1))
    }

    fn kind(&self) -> MatchKind {
        MatchKind::SpacelessContainment
    }
}

/// First glossary key contained in the extracted content, replaced in the
/// cleaned text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractedContainment;

impl MatchStrategy for ExtractedContainment {
    fn resolve(&self, ctx: &MatchContext<'_>, glossary: &Glossary) -> Option<String> {
        if ctx.extracted.is_empty() {
            return None;
        }
        glossary
            .iter()
            .find(|(key, _)| !key.is_empty() && ctx.extracted.contains(key))
            .map(|(key, value)| ctx.cleaned.replacen(key, value, 1))
    }

    fn kind(&self) -> MatchKind {
        MatchKind::ExtractedContainment
    }
}

/// Replaces every character that is itself a glossary key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterSubstitution;

impl MatchStrategy for CharacterSubstitution {
    fn resolve(&self, ctx: &MatchContext<'_>, glossary: &Glossary) -> Option<String> {
        let mut buf = [0u8; 4];
        let translated = ctx
            .cleaned
            .chars()
            .map(|c| {
                let ch: &str = c.encode_utf8(&mut buf);
                glossary.get(ch).unwrap_or(ch).to_string()
            })
            .collect();
        Some(translated)
    }

    fn kind(&self) -> MatchKind {
        MatchKind::CharacterSubstitution
    }
}
