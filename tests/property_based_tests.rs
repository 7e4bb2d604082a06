//! Property-based tests for cleaning and matching.
//!
//! Checks invariants across broad input sets rather than single examples:
//! idempotent cleaning, order preservation, the detection floor, the
//! fallback guarantee and exact-match priority.

use annotext::{Glossary, GlossaryMatcher, MatchKind, Normalizer};

mod common;
use common::*;

/// Inputs mixing codes, punctuation, controls and technical data.
fn noisy_inputs() -> Vec<String> {
    let mut inputs: Vec<String> = vec![
        "",
        " ",
        "{}",
        "{{}}",
        r"\\",
        r"\\P",
        r"\P\P\P",
        "%%%%c50",
        "%%%",
        r"\S1^2;\S3/4;",
        "、、、",
        "，。；：",
        "\u{FEFF}备注\u{200B}",
        r"\U+005C\U+007B\U+007D",
        r"{\fArial|b1;{\C2;嵌套}}",
        "a \u{4E00} b",
        "5 kg 重",
        "柱 C1 800x800",
        "🔢📐",
        "\t\r\n",
    ]
    .into_iter()
    .map(String::from)
    .collect();

    inputs.extend(MEASUREMENTS.iter().map(|s| s.to_string()));
    inputs.extend(SPLIT_MEASUREMENTS.iter().map(|(raw, _)| raw.to_string()));
    inputs.extend(MTEXT_SAMPLES.iter().map(|(raw, _)| raw.to_string()));
    inputs.extend(DRAWING_ANNOTATIONS.iter().map(|s| s.to_string()));
    inputs.extend(Glossary::builtin().keys().map(String::from));
    inputs
}

mod cleaning_properties {
    use super::*;

    #[test]
    fn test_clean_is_idempotent() {
        let normalizer = Normalizer::new();
        for input in noisy_inputs() {
            assert_idempotent(&normalizer, &input);
        }
    }

    #[test]
    fn test_clean_never_leaves_edge_whitespace() {
        let normalizer = Normalizer::new();
        for input in noisy_inputs() {
            let cleaned = normalizer.clean(&input);
            assert_eq!(cleaned.trim(), cleaned, "'{}' cleaned with edge whitespace", input);
            assert!(!cleaned.contains("  "), "'{}' cleaned with a double space", input);
        }
    }

    #[test]
    fn test_extraction_is_substring_free_of_latin_runs() {
        let normalizer = Normalizer::new();
        for input in noisy_inputs() {
            let cleaned = normalizer.clean(&input);
            let extracted = normalizer.extract_script_content(&input);
            if extracted != cleaned {
                for run in extracted.split(' ') {
                    assert!(
                        run.chars().any(annotext::domain::script::is_source_script),
                        "run '{}' of '{}' has no ideograph",
                        run,
                        input
                    );
                }
            }
        }
    }
}

mod matching_properties {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let matcher = GlossaryMatcher::default();
        let texts: Vec<String> = (0..200)
            .map(|i| match i % 4 {
                0 => format!("{}号喷漆室", i),
                1 => format!("备 注{}", i),
                2 => format!("A-{:03}", i),
                _ => format!("未知{}", i),
            })
            .collect();

        let sequential = matcher.translate(&texts, Glossary::builtin());
        let parallel = matcher.translate_parallel(&texts, Glossary::builtin());

        assert_eq!(sequential.len(), texts.len());
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(&sequential[i].source_text, text);
            assert_eq!(&parallel[i].source_text, text);
        }
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_detection_floor() {
        let matcher = GlossaryMatcher::default();
        for c in ['柱', '门', '窗', '\u{4E00}', '\u{9FFF}'] {
            let single = c.to_string();
            assert!(!matcher.detect(&single), "single '{}' detected", c);
            assert!(!matcher.detect(&format!("{} ABC 123", c)));
            assert!(matcher.detect(&format!("{}{}", c, c)), "pair '{}{}' not detected", c, c);
        }
    }

    #[test]
    fn test_fallback_guarantee() {
        let matcher = GlossaryMatcher::default();
        let empty = Glossary::new();
        for input in noisy_inputs() {
            let result = matcher.translate_one(&input, &empty);
            assert_fallback(&result);
        }
    }

    #[test]
    fn test_builtin_keys_match_exactly() {
        let matcher = GlossaryMatcher::default();
        let normalizer = Normalizer::new();
        let glossary = Glossary::builtin();

        for (source, target) in glossary.iter() {
            if target == normalizer.clean_source_script(source) {
                continue;
            }
            let result = matcher.translate_one(source, glossary);
            assert_translated(&result, target, MatchKind::Exact);
        }
    }

    #[test]
    fn test_results_are_never_empty() {
        let matcher = GlossaryMatcher::default();
        for input in noisy_inputs() {
            let result = matcher.translate_one(&input, Glossary::builtin());
            assert!(!result.translated_text.is_empty(), "empty translation for '{}'", input);
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }
}
