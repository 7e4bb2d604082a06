//! Chinese script classification.
//!
//! Code point ranges that count as source-language script, and the run
//! matcher that pulls ideographic runs out of cleaned text.

use super::PatternMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Ideograph blocks that count as Chinese script.
const IDEOGRAPH_RANGES: &[(u32, u32)] = &[
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0x3400, 0x4DBF),   // Extension A
    (0x20000, 0x2EBEF), // Extensions B to F
    (0xF900, 0xFAFF),   // Compatibility Ideographs
    (0x2F800, 0x2FA1F), // Compatibility Ideographs Supplement
];

/// CJK symbols/punctuation and the halfwidth/fullwidth forms block.
const FULLWIDTH_RANGES: &[(u32, u32)] = &[(0x3000, 0x303F), (0xFF00, 0xFFEF)];

/// Only this block counts toward the meaningful-content floor.
const CORE_IDEOGRAPHS: (u32, u32) = (0x4E00, 0x9FFF);

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let code = c as u32;
    ranges
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Returns true for any Chinese ideograph, including extension and
/// compatibility blocks.
pub fn is_source_script(c: char) -> bool {
    in_ranges(c, IDEOGRAPH_RANGES)
}

/// Returns true for the main CJK Unified Ideographs block only.
pub fn is_core_ideograph(c: char) -> bool {
    in_ranges(c, &[CORE_IDEOGRAPHS])
}

/// Returns true for full-width punctuation and the ideographic space.
pub fn is_fullwidth(c: char) -> bool {
    in_ranges(c, FULLWIDTH_RANGES)
}

/// Counts characters from the core ideograph block.
pub fn count_core_ideographs(text: &str) -> usize {
    text.chars().filter(|&c| is_core_ideograph(c)).count()
}

/// Extracts ideographic runs from cleaned annotation text.
///
/// A run is a maximal span of ideographs, full-width punctuation, and the
/// technical characters that annotations glue onto them (ASCII
/// alphanumerics, `.`, `/`, `%`, `℃`, `°`, `±`, `Ø`, `×`), so that
/// `长2000X宽500X高600mm` stays one run. Spans without a single ideograph
/// are not runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptRunMatcher;

impl ScriptRunMatcher {
    /// Creates a new script run matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(concat!(
                r"[",
                r"\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{20000}-\x{2EBEF}",
                r"\x{F900}-\x{FAFF}\x{2F800}-\x{2FA1F}",
                r"\x{3000}-\x{303F}\x{FF00}-\x{FFEF}",
                r"A-Za-z0-9./%℃°±Ø×",
                r"]+",
            ))
            .expect("Valid script run regex")
        });
        &PATTERN
    }
}

impl PatternMatcher for ScriptRunMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern()
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|run| run.chars().any(is_source_script))
            .collect()
    }

    fn normalize(&self, text: &str) -> Option<String> {
        let runs = self.extract_all(text);
        if runs.is_empty() {
            None
        } else {
            Some(runs.join(" "))
        }
    }
}
