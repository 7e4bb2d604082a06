//! Match strategy trait and supporting types.
//!
//! A strategy looks at one annotation (in its raw, cleaned and extracted
//! forms) and either proposes a translation or passes.

use crate::glossary::Glossary;
use serde::Serialize;
use std::fmt;

/// Which strategy produced a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// A spelling of the whole text is a glossary key
    Exact,

    /// A key occurs in the cleaned text
    CleanedContainment,

    /// A key occurs in the cleaned text once spaces are ignored
    SpacelessContainment,

    /// A key occurs in the extracted Chinese content
    ExtractedContainment,

    /// Single-character keys substituted one by one
    CharacterSubstitution,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CleanedContainment => "cleaned_containment",
            Self::SpacelessContainment => "spaceless_containment",
            Self::ExtractedContainment => "extracted_containment",
            Self::CharacterSubstitution => "character_substitution",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three views of one annotation that strategies work on.
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    /// Raw text exactly as extracted from the drawing
    pub source: &'a str,
    /// Cleaned text
    pub cleaned: &'a str,
    /// Extracted Chinese runs (equal to `cleaned` when there were none)
    pub extracted: &'a str,
}

/// Outcome of translating one annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationResult {
    pub source_text: String,
    pub cleaned_text: String,
    pub extracted_chinese: String,
    pub translated_text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub confidence: f32,
    /// `None` when the fallback marker was emitted
    pub strategy: Option<MatchKind>,
}

impl TranslationResult {
    /// Returns true if a glossary strategy matched.
    pub fn is_matched(&self) -> bool {
        self.strategy.is_some()
    }
}

/// Strategy for resolving a translation from a glossary.
///
/// Implementations return `None` when they have nothing to offer. A result
/// equal to the cleaned text is treated as no match by the caller.
pub trait MatchStrategy: Send + Sync {
    /// Proposes a translation for `ctx`.
    fn resolve(&self, ctx: &MatchContext<'_>, glossary: &Glossary) -> Option<String>;

    /// Identifies this strategy in results and logs.
    fn kind(&self) -> MatchKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_kind_names() {
        assert_eq!(MatchKind::Exact.to_string(), "exact");
        assert_eq!(
            serde_json::to_string(&MatchKind::SpacelessContainment).unwrap(),
            "\"spaceless_containment\""
        );
    }

    #[test]
    fn test_result_is_matched() {
        let result = TranslationResult {
            source_text: "备 注".to_string(),
            cleaned_text: "备 注".to_string(),
            extracted_chinese: "备 注".to_string(),
            translated_text: "備考".to_string(),
            source_lang: "ZH".to_string(),
            target_lang: "JA".to_string(),
            confidence: 0.95,
            strategy: Some(MatchKind::Exact),
        };
        assert!(result.is_matched());

        let fallback = TranslationResult {
            strategy: None,
            ..result
        };
        assert!(!fallback.is_matched());
    }
}
