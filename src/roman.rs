//! 罗马数字符号展开
//!
//! 将 Number Forms 区 (U+2160..U+217F) 的单字罗马数字符号展开为英文数词

use crate::rule::Rule;
use crate::types::Case;

/// 各符号对应的数词，按区内偏移排列
const ROMAN_NUMERAL_WORDS: [&str; 16] = [
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "fifty",
    "one hundred",
    "five hundred",
    "one thousand",
];

const CAPITAL_FIRST: u32 = 0x2160;
const SMALL_FIRST: u32 = 0x2170;
const SMALL_LAST: u32 = 0x217F;

/// 查表：返回 (数词, 是否大写符号)
fn lookup(ch: char) -> Option<(&'static str, bool)> {
    let code = ch as u32;
    if (CAPITAL_FIRST..SMALL_FIRST).contains(&code) {
        Some((ROMAN_NUMERAL_WORDS[(code - CAPITAL_FIRST) as usize], true))
    } else if (SMALL_FIRST..=SMALL_LAST).contains(&code) {
        Some((ROMAN_NUMERAL_WORDS[(code - SMALL_FIRST) as usize], false))
    } else {
        None
    }
}

/// 罗马数字符号转阿拉伯数字数词
///
/// 仅处理 Number Forms 区的单字符号；ASCII 字母序列（"IV"、"XL"）不在范围内，
/// 非符号字符原样保留
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanToArabic {
    /// 数词大小写；None 时跟随符号本身大小写
    pub case: Option<Case>,
}

impl RomanToArabic {
    /// 默认输出小写数词
    pub fn new() -> Self {
        Self {
            case: Some(Case::Lower),
        }
    }

    /// 创建固定大小写输出的规则
    pub fn with_case(case: Case) -> Self {
        Self { case: Some(case) }
    }

    /// 数词大小写跟随符号（大写符号 → 大写数词）
    pub fn matching_case() -> Self {
        Self { case: None }
    }
}

impl Default for RomanToArabic {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for RomanToArabic {
    fn name(&self) -> &'static str {
        "roman_to_arabic"
    }

    fn apply(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());

        for ch in text.chars() {
            match lookup(ch) {
                Some((word, capital)) => {
                    let upper = match self.case {
                        Some(Case::Upper) => true,
                        Some(Case::Lower) => false,
                        None => capital,
                    };
                    if upper {
                        result.push_str(&word.to_uppercase());
                    } else {
                        result.push_str(word);
                    }
                }
                None => result.push(ch),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_capital_default_lower() {
        let rule = RomanToArabic::new();
        assert_eq!(
            rule.apply("Glycogen storage disease type Ⅳ"),
            "Glycogen storage disease type four"
        );
    }

    #[test]
    fn test_roman_small() {
        let rule = RomanToArabic::new();
        assert_eq!(rule.apply("chapter ⅳ"), "chapter four");
        assert_eq!(rule.apply("ⅻ"), "twelve");
    }

    #[test]
    fn test_roman_matching_case() {
        let rule = RomanToArabic::matching_case();
        assert_eq!(rule.apply("Ⅳ"), "FOUR");
        assert_eq!(rule.apply("ⅳ"), "four");
    }

    #[test]
    fn test_roman_case_override_upper() {
        let rule = RomanToArabic::with_case(Case::Upper);
        assert_eq!(rule.apply("ⅳ"), "FOUR");
    }

    #[test]
    fn test_roman_large_values() {
        let rule = RomanToArabic::new();
        assert_eq!(rule.apply("Ⅼ Ⅽ Ⅾ Ⅿ"), "fifty one hundred five hundred one thousand");
        assert_eq!(rule.apply("ⅽ"), "one hundred");
    }

    #[test]
    fn test_roman_ascii_sequences_untouched() {
        let rule = RomanToArabic::new();
        // ASCII 字母拼出的罗马数字不在处理范围内
        assert_eq!(rule.apply("type IV and XL"), "type IV and XL");
    }

    #[test]
    fn test_roman_non_numeral_passthrough() {
        let rule = RomanToArabic::new();
        assert_eq!(rule.apply("no numerals here"), "no numerals here");
    }
}
