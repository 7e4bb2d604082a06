//! Character-level cleaning stages that run around the MTEXT rule set.

use crate::domain::script::is_source_script;
use crate::domain::WhitespaceMatcher;

/// Full-width and Chinese punctuation that becomes a single space.
const PUNCTUATION_TO_SPACE: &[char] = &[
    '，', '。', '；', '：', '！', '？', '“', '”', '‘', '’', '（', '）', '【', '】', '《', '》', '〈',
    '〉', '「', '」', '『', '』', '〔', '〕', '…', '—',
];

/// The enumeration comma separates list items, so it becomes a slash.
const ENUMERATION_COMMA: char = '、';

/// Invisible characters that are dropped along with control characters.
const INVISIBLE: &[char] = &['\u{FEFF}', '\u{200B}', '\u{200C}', '\u{200D}'];

fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}') || INVISIBLE.contains(&c)
}

/// Turns tabs and line breaks into spaces and drops every other control
/// character.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\r' => Some(' '),
            c if is_stripped_control(c) => None,
            c => Some(c),
        })
        .collect()
}

/// Maps punctuation to spaces or slashes, collapses whitespace and trims.
pub fn normalize_punctuation(text: &str) -> String {
    let mapped: String = text
        .chars()
        .map(|c| {
            if c == ENUMERATION_COMMA {
                '/'
            } else if PUNCTUATION_TO_SPACE.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();
    WhitespaceMatcher::collapse(&mapped)
}

/// Drops a single space that sits between an ASCII alphanumeric and a
/// Chinese ideograph, in either order.
pub fn rejoin_mixed_script(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == ' ' && i > 0 && i + 1 < chars.len() {
            let before = chars[i - 1];
            let after = chars[i + 1];
            let alnum_then_script = before.is_ascii_alphanumeric() && is_source_script(after);
            let script_then_alnum = is_source_script(before) && after.is_ascii_alphanumeric();
            if alnum_then_script || script_then_alnum {
                continue;
            }
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_control_chars() {
        assert_eq!(strip_control_chars("备\u{0}注\u{7}"), "备注");
        assert_eq!(strip_control_chars("第一行\r\n第二行"), "第一行  第二行");
        assert_eq!(strip_control_chars("\u{FEFF}合计\u{85}"), "合计");
    }

    #[test]
    fn test_normalize_punctuation() {
        assert_eq!(normalize_punctuation("旋转（90度）"), "旋转 90度");
        assert_eq!(normalize_punctuation("图号、型号或标准号"), "图号/型号或标准号");
        assert_eq!(normalize_punctuation("  总   页,第   页 "), "总 页,第 页");
        assert_eq!(normalize_punctuation("说明：见图。"), "说明 见图");
    }

    #[test]
    fn test_rejoin_mixed_script() {
        assert_eq!(rejoin_mixed_script("最大重量 5kg/只"), "最大重量5kg/只");
        assert_eq!(rejoin_mixed_script("A 区 3 号"), "A区3号");
        assert_eq!(rejoin_mixed_script("备 注"), "备 注");
        assert_eq!(rejoin_mixed_script("5kg / 只"), "5kg / 只");
    }
}
