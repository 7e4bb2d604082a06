//! Unit-suffixed measurements.
//!
//! Annotations carry technical data such as `45min`, `80℃` or `6.5m`.
//! Cleaning must never separate a value from its unit, and it mends values
//! that upstream formatting already split (`45 min`, `6. 5m`).

use super::PatternMatcher;
use once_cell::sync::Lazy;
use regex::Regex;

/// Unit suffixes recognised after a number. Longer spellings come before
/// their prefixes because regex alternation is leftmost-first.
pub const UNITS: &[&str] = &[
    "min", "mm", "cm", "km", "ml", "m²", "m³", "㎡", "kg", "kN", "kW", "kV", "kPa", "MPa", "Pa",
    "Hz", "°C", "℃", "°", "%", "m", "g", "t", "h", "s",
];

fn unit_alternation() -> String {
    UNITS
        .iter()
        .map(|unit| regex::escape(unit))
        .collect::<Vec<_>>()
        .join("|")
}

/// Matcher for numbers followed by a unit suffix.
#[derive(Debug, Clone, Default)]
pub struct MeasurementMatcher;

impl MeasurementMatcher {
    /// Creates a new measurement matcher.
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(
                r"(\d+(?:\s*\.\s*\d+)?)\s*({})",
                unit_alternation()
            ))
            .expect("Valid measurement regex")
        });
        &PATTERN
    }

    /// A digit run, whitespace, then a unit that is not the start of a
    /// longer word.
    fn split_unit_pattern() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(&format!(
                r"(\d)\s+({})([^A-Za-z]|$)",
                unit_alternation()
            ))
            .expect("Valid split unit regex")
        });
        &PATTERN
    }

    fn split_decimal_after() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"(\d)\.\s+(\d)").expect("Valid decimal regex"));
        &PATTERN
    }

    fn split_decimal_before() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"(\d)\s+\.(\d)").expect("Valid decimal regex"));
        &PATTERN
    }

    /// Rejoins values and units, and decimal points and digits, that were
    /// separated by whitespace.
    pub fn repair(text: &str) -> String {
        let text = Self::split_unit_pattern().replace_all(text, "${1}${2}${3}");
        let text = Self::split_decimal_after().replace_all(&text, "${1}.${2}");
        let text = Self::split_decimal_before().replace_all(&text, "${1}.${2}");
        text.into_owned()
    }
}

impl PatternMatcher for MeasurementMatcher {
    fn pattern(&self) -> &Regex {
        Self::regex()
    }

    fn extract_all<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.pattern().find_iter(text).map(|m| m.as_str()).collect()
    }

    fn normalize(&self, text: &str) -> Option<String> {
        self.pattern()
            .find(text)
            .map(|m| m.as_str().chars().filter(|c| !c.is_whitespace()).collect())
    }

    fn generate_variants(&self, normalized: &str) -> Vec<String> {
        let split = normalized
            .char_indices()
            .find(|&(_, c)| !c.is_ascii_digit() && c != '.')
            .map(|(idx, _)| idx);

        match split {
            Some(idx) if idx > 0 => vec![
                normalized.to_string(),
                format!("{} {}", &normalized[..idx], &normalized[idx..]),
            ],
            _ => vec![normalized.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_measurements() {
        let matcher = MeasurementMatcher::new();
        assert_eq!(
            matcher.extract_all("烘干时间45min/车 温度80℃ 高6.5m"),
            vec!["45min", "80℃", "6.5m"]
        );
    }

    #[test]
    fn test_normalize_strips_inner_spaces() {
        let matcher = MeasurementMatcher::new();
        assert_eq!(matcher.normalize("约 6 . 5 m"), Some("6.5m".to_string()));
        assert_eq!(matcher.normalize("无单位"), None);
    }

    #[test]
    fn test_variants() {
        let matcher = MeasurementMatcher::new();
        assert_eq!(
            matcher.generate_variants("45min"),
            vec!["45min".to_string(), "45 min".to_string()]
        );
        assert_eq!(matcher.generate_variants("mm"), vec!["mm".to_string()]);
    }

    #[test]
    fn test_repair_rejoins_units() {
        assert_eq!(MeasurementMatcher::repair("45 min/车"), "45min/车");
        assert_eq!(MeasurementMatcher::repair("温度80 ℃"), "温度80℃");
        assert_eq!(MeasurementMatcher::repair("高 6. 5m"), "高 6.5m");
        assert_eq!(MeasurementMatcher::repair("6 .5 m"), "6.5m");
    }

    #[test]
    fn test_repair_leaves_words_alone() {
        assert_eq!(MeasurementMatcher::repair("5 months"), "5 months");
        assert_eq!(MeasurementMatcher::repair("A 5 B"), "A 5 B");
        assert_eq!(MeasurementMatcher::repair("1:100"), "1:100");
    }
}
