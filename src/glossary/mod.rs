//! Source to target phrase glossaries.
//!
//! A [`Glossary`] is an insertion-ordered map. Iteration order is part of
//! its contract: partial matching walks entries in order and stops at the
//! first key found in the text, so earlier entries win ties.

mod builtin;

use crate::error::{AnnotextError, AnnotextResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::path::Path;

/// An ordered, read-only-by-convention mapping from source phrase to
/// target phrase.
///
/// Inserting an existing key replaces its value but keeps its original
/// position. Empty keys are ignored because they would match every string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Glossary {
    entries: IndexMap<String, String>,
}

impl Glossary {
    /// Creates an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in CAD glossary, built once and shared.
    pub fn builtin() -> &'static Glossary {
        static BUILTIN: Lazy<Glossary> = Lazy::new(build_glossary);
        &BUILTIN
    }

    /// Inserts an entry, returning the previous value for `source`.
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) -> Option<String> {
        let source = source.into();
        if source.is_empty() {
            log::warn!("Ignoring glossary entry with an empty source phrase");
            return None;
        }
        self.entries.insert(source, target.into())
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn contains_key(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Source phrases in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Layers `other` over this glossary: existing keys take `other`'s
    /// values in place, new keys are appended in `other`'s order.
    pub fn merge(&mut self, other: &Glossary) {
        for (source, target) in other.iter() {
            self.insert(source, target);
        }
    }

    /// Parses a JSON object of `"source": "target"` pairs, keeping document
    /// order.
    ///
    /// # Errors
    /// Returns [`AnnotextError::GlossaryFormat`] if the JSON is not an
    /// object of strings or contains an empty key.
    pub fn from_json_str(json: &str) -> AnnotextResult<Self> {
        let entries: IndexMap<String, String> = serde_json::from_str(json)?;

        if entries.keys().any(|k| k.is_empty()) {
            return Err(AnnotextError::GlossaryFormat {
                path: None,
                reason: "empty source phrase".to_string(),
            });
        }

        Ok(Self { entries })
    }

    /// Loads a JSON glossary file.
    pub fn load(path: &Path) -> AnnotextResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| AnnotextError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let glossary = Self::from_json_str(&json).map_err(|err| match err {
            AnnotextError::GlossaryFormat { reason, .. } => AnnotextError::GlossaryFormat {
                path: Some(path.to_path_buf()),
                reason,
            },
            other => other,
        })?;

        log::info!(
            "Loaded {} glossary entries from {}",
            glossary.len(),
            path.display()
        );
        Ok(glossary)
    }

    /// Serializes the glossary as a pretty-printed JSON object.
    pub fn to_json_pretty(&self) -> AnnotextResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for Glossary {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for (source, target) in iter {
            glossary.insert(source, target);
        }
        glossary
    }
}

/// Builds the canonical CAD/AEC glossary.
///
/// Returns a fresh value; use [`Glossary::builtin`] for the shared instance.
pub fn build_glossary() -> Glossary {
    builtin::CAD_TERMS.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contents() {
        let glossary = build_glossary();
        assert_eq!(glossary.get("备 注"), Some("備考"));
        assert_eq!(glossary.get("图层"), Some("レイヤー"));
        assert_eq!(glossary.keys().next(), Some("图层"));
        assert_eq!(&glossary, Glossary::builtin());
    }

    #[test]
    fn test_repeated_key_keeps_position_takes_last_value() {
        let glossary = build_glossary();
        assert_eq!(glossary.get("货淋室外购"), Some("シャワーブース外注"));

        let pos_wash = glossary.keys().position(|k| k == "货淋室外购").unwrap();
        let pos_inlet = glossary.keys().position(|k| k == "进出口").unwrap();
        assert!(pos_wash < pos_inlet);
    }

    #[test]
    fn test_insert_ignores_empty_key() {
        let mut glossary = Glossary::new();
        assert_eq!(glossary.insert("", "x"), None);
        assert!(glossary.is_empty());
    }

    #[test]
    fn test_merge_overrides_in_place_and_appends() {
        let mut base: Glossary = [("图层", "レイヤー"), ("块", "ブロック")].into_iter().collect();
        let user: Glossary = [("块", "ブロック定義"), ("标注", "寸法")].into_iter().collect();
        base.merge(&user);

        let entries: Vec<_> = base.iter().collect();
        assert_eq!(
            entries,
            vec![("图层", "レイヤー"), ("块", "ブロック定義"), ("标注", "寸法")]
        );
    }

    #[test]
    fn test_json_keeps_document_order() {
        let glossary = Glossary::from_json_str(r#"{"钢筋": "鉄筋", "混凝土": "コンクリート"}"#).unwrap();
        assert_eq!(glossary.keys().collect::<Vec<_>>(), vec!["钢筋", "混凝土"]);

        let json = glossary.to_json_pretty().unwrap();
        assert!(json.find("钢筋").unwrap() < json.find("混凝土").unwrap());
    }

    #[test]
    fn test_json_rejects_bad_input() {
        assert!(matches!(
            Glossary::from_json_str(r#"{"": "x"}"#),
            Err(AnnotextError::GlossaryFormat { .. })
        ));
        assert!(matches!(
            Glossary::from_json_str("[1, 2]"),
            Err(AnnotextError::GlossaryFormat { .. })
        ));
    }
}
