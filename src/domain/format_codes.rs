//! MTEXT control codes.
//!
//! Multi-line text entities embed inline formatting as backslash codes
//! (`\P`, `\fSimSun|b0;`, `\H2.5x;`, `\S1^2;`), brace groups and `%%`
//! special-symbol escapes. [`FormatRuleSet`] strips them with an ordered
//! list of rules; order matters because later rules rely on earlier ones
//! having removed the codes nested inside them.
//!
//! Every rule is anchored on `\`, `%%` or a brace, so plain measurements
//! such as `45min` or `80℃` are never touched.

use super::PatternMatcher;
use crate::error::{AnnotextError, AnnotextResult};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// What a rule does with the spans it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Remove the match.
    Delete,

    /// Replace with a regex expansion template (`$1`, `${name}`).
    Replace(String),

    /// Decode a `\U+XXXX` escape; the hex digits must be capture group 1.
    DecodeUnicode,

    /// Map a `%%x` escape to its symbol; the letter must be capture group 1.
    SpecialSymbol,
}

/// A single named rewrite rule.
#[derive(Debug, Clone)]
pub struct FormatRule {
    name: String,
    regex: Regex,
    action: RuleAction,
}

impl FormatRule {
    /// Compiles a rule.
    ///
    /// # Errors
    /// Returns [`AnnotextError::PatternError`] if `pattern` is not a valid
    /// regex, and [`AnnotextError::InvalidInput`] if it can match the empty
    /// string (such a rule would rewrite every position of every input).
    pub fn new(name: impl Into<String>, pattern: &str, action: RuleAction) -> AnnotextResult<Self> {
        let regex = Regex::new(pattern).map_err(|e| AnnotextError::PatternError {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        if regex.is_match("") {
            return Err(AnnotextError::InvalidInput {
                parameter: "pattern".to_string(),
                reason: format!("'{}' matches the empty string", pattern),
            });
        }
        Ok(Self {
            name: name.into(),
            regex,
            action,
        })
    }

    fn builtin(name: &str, pattern: &str, action: RuleAction) -> Self {
        Self::new(name, pattern, action).expect("Valid MTEXT rule pattern")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn action(&self) -> &RuleAction {
        &self.action
    }

    /// Applies this rule to every match in `text`.
    pub fn apply(&self, text: &str) -> String {
        match &self.action {
            RuleAction::Delete => self.regex.replace_all(text, "").into_owned(),
            RuleAction::Replace(template) => {
                self.regex.replace_all(text, template.as_str()).into_owned()
            }
            RuleAction::DecodeUnicode => self
                .regex
                .replace_all(text, |caps: &Captures| decode_unicode_escape(caps))
                .into_owned(),
            RuleAction::SpecialSymbol => self
                .regex
                .replace_all(text, |caps: &Captures| special_symbol(caps).to_string())
                .into_owned(),
        }
    }
}

fn decode_unicode_escape(caps: &Captures) -> String {
    caps.get(1)
        .and_then(|hex| u32::from_str_radix(hex.as_str(), 16).ok())
        .and_then(char::from_u32)
        .filter(|c| !c.is_control() && !matches!(c, '\\' | '{' | '}'))
        .map(String::from)
        .unwrap_or_default()
}

fn special_symbol(caps: &Captures) -> &'static str {
    match caps.get(1).map(|m| m.as_str()) {
        Some("c" | "C") => "Ø",
        Some("d" | "D") => "°",
        Some("p" | "P") => "±",
        Some("%") => "%",
        // %%u / %%o toggle underline and overline
        _ => "",
    }
}

/// An ordered list of [`FormatRule`]s.
#[derive(Debug, Clone)]
pub struct FormatRuleSet {
    rules: Vec<FormatRule>,
}

impl FormatRuleSet {
    /// Creates a rule set that applies `rules` in the given order.
    pub fn new(rules: Vec<FormatRule>) -> Self {
        Self { rules }
    }

    /// The standard MTEXT rule set, shared by every default normalizer.
    pub fn mtext() -> &'static FormatRuleSet {
        static RULES: Lazy<FormatRuleSet> = Lazy::new(|| FormatRuleSet::new(mtext_rules()));
        &RULES
    }

    /// Runs every rule once, in order.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            let next = rule.apply(&current);
            if next != current {
                log::trace!("rule {}: '{}' -> '{}'", rule.name, current, next);
                current = next;
            }
        }
        current
    }

    pub fn rules(&self) -> &[FormatRule] {
        &self.rules
    }

    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for FormatRuleSet {
    fn default() -> Self {
        Self::mtext().clone()
    }
}

fn mtext_rules() -> Vec<FormatRule> {
    use RuleAction::*;

    vec![
        // `\\` is a literal backslash; drop it before anything reads it as a code
        FormatRule::builtin("escaped_backslash", r"\\\\", Delete),
        FormatRule::builtin("unicode_escape", r"\\[Uu]\+([0-9A-Fa-f]{4})", DecodeUnicode),
        FormatRule::builtin("special_symbol", r"%%([cCdDpPuUoO%])", SpecialSymbol),
        FormatRule::builtin("paragraph_properties", r"\\p[0-9A-Za-z.,\-]*;", Delete),
        FormatRule::builtin("paragraph_break", r"\\[PX]", Replace(" ".to_string())),
        FormatRule::builtin("non_breaking_space", r"\\~", Replace(" ".to_string())),
        FormatRule::builtin("font", r"\\[fF][^;\\{}]*;", Delete),
        FormatRule::builtin("height", r"\\[Hh]\d*\.?\d+x?;", Delete),
        FormatRule::builtin("width", r"\\[Ww]\d*\.?\d+x?;", Delete),
        FormatRule::builtin("tracking", r"\\[Tt]\d*\.?\d+x?;", Delete),
        FormatRule::builtin("oblique", r"\\[Qq]-?\d*\.?\d+;", Delete),
        FormatRule::builtin("color", r"\\[Cc]\d+;", Delete),
        FormatRule::builtin("alignment", r"\\[Aa]\d;", Delete),
        FormatRule::builtin(
            "stacking",
            r"\\S([^;^#/\\]*)[\^#/]([^;\\]*);",
            Replace("${1}/${2}".to_string()),
        ),
        FormatRule::builtin("generic_code", r"\\[A-Za-z]\d*(?:\.\d+)?;", Delete),
        FormatRule::builtin("toggle", r"\\[LlOoKk]", Delete),
        FormatRule::builtin("escaped_brace", r"\\[{}]", Delete),
        FormatRule::builtin("group_brace", r"[{}]", Delete),
    ]
}

/// Detects MTEXT control codes in raw text.
#[derive(Debug, Clone, Default)]
pub struct FormatCodeMatcher;

impl FormatCodeMatcher {
    /// Creates a new format code matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"\\(?:[Uu]\+[0-9A-Fa-f]{4}|[A-Za-z~{}\\])|%%[cCdDpPuUoO%]|[{}]")
                .expect("Valid format code regex")
        });
        &PATTERN
    }

    /// Returns true if `text` contains any MTEXT control sequence.
    pub fn has_format_codes(&self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

impl PatternMatcher for FormatCodeMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// Strips codes with the standard MTEXT rule set; `None` when there was
    /// nothing to strip.
    fn normalize(&self, text: &str) -> Option<String> {
        if self.has_format_codes(text) {
            Some(FormatRuleSet::mtext().apply(text))
        } else {
            None
        }
    }
}
