//! 数词转数字
//!
//! 将连续的英文数词短语（如 "one hundred"、"two million"）转换为数字串

use std::collections::HashMap;

use crate::rule::Rule;

lazy_static::lazy_static! {
    /// 个位与十几位数词
    static ref UNITS: HashMap<&'static str, u64> = HashMap::from([
        ("zero", 0),
        ("one", 1),
        ("two", 2),
        ("three", 3),
        ("four", 4),
        ("five", 5),
        ("six", 6),
        ("seven", 7),
        ("eight", 8),
        ("nine", 9),
        ("ten", 10),
        ("eleven", 11),
        ("twelve", 12),
        ("thirteen", 13),
        ("fourteen", 14),
        ("fifteen", 15),
        ("sixteen", 16),
        ("seventeen", 17),
        ("eighteen", 18),
        ("nineteen", 19),
    ]);

    /// 整十数词
    static ref TENS: HashMap<&'static str, u64> = HashMap::from([
        ("twenty", 20),
        ("thirty", 30),
        ("forty", 40),
        ("fifty", 50),
        ("sixty", 60),
        ("seventy", 70),
        ("eighty", 80),
        ("ninety", 90),
    ]);

    /// 量级数词
    static ref MAGNITUDES: HashMap<&'static str, u64> = HashMap::from([
        ("hundred", 100),
        ("thousand", 1_000),
        ("million", 1_000_000),
        ("billion", 1_000_000_000),
    ]);
}

/// 解析数词短语
///
/// 大小写不敏感；连字符视为空格（"twenty-three" 与 "twenty three" 等价）。
/// 裸量级词按 1 计（"hundred" → 100）。运算饱和，不会溢出。
/// 含任何非数词的输入返回 None，不会 panic。
pub fn parse_number_phrase(phrase: &str) -> Option<u64> {
    let lowered = phrase.to_lowercase().replace('-', " ");
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut found_any = false;

    for word in lowered.split_whitespace() {
        if let Some(&value) = UNITS.get(word) {
            current = current.saturating_add(value);
        } else if let Some(&value) = TENS.get(word) {
            current = current.saturating_add(value);
        } else if let Some(&value) = MAGNITUDES.get(word) {
            if current == 0 {
                current = 1;
            }
            if value == 100 {
                current = current.saturating_mul(value);
            } else {
                // thousand/million/billion 结算当前段
                total = total.saturating_add(current.saturating_mul(value));
                current = 0;
            }
        } else {
            return None;
        }
        found_any = true;
    }

    if found_any {
        Some(total.saturating_add(current))
    } else {
        None
    }
}

/// 数词短语转数字
///
/// 按空白分词；连续可解析的数词 token 聚为最大短语后整体转换，
/// 其余 token（含附着标点者，如 "apples."）原样保留；
/// 输出 token 以单个空格连接
#[derive(Debug, Clone, Copy, Default)]
pub struct WordsToDigits;

impl WordsToDigits {
    /// 冲刷数词缓冲
    ///
    /// 缓冲内每个 token 均已单独通过解析，整体解析必须成功
    fn flush(buffer: &mut Vec<&str>, output: &mut Vec<String>) {
        if buffer.is_empty() {
            return;
        }
        let phrase = buffer.join(" ");
        match parse_number_phrase(&phrase) {
            Some(value) => output.push(value.to_string()),
            None => panic!("数词短语整体解析失败: {:?}", phrase),
        }
        buffer.clear();
    }
}

impl Rule for WordsToDigits {
    fn name(&self) -> &'static str {
        "words_to_digits"
    }

    fn apply(&self, text: &str) -> String {
        let mut output: Vec<String> = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();

        for token in text.split_whitespace() {
            if parse_number_phrase(token).is_some() {
                // 可能与后续 token 组成更长短语，先入缓冲
                buffer.push(token);
            } else {
                Self::flush(&mut buffer, &mut output);
                output.push(token.to_string());
            }
        }
        Self::flush(&mut buffer, &mut output);

        output.join(" ")
    }
}
