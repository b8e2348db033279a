//! 规则定义
//!
//! 每条规则是一个构造后不可变的纯文本变换单元

use unicode_normalization::UnicodeNormalization;

use crate::types::Form;

/// 文本变换规则
///
/// `apply` 对任意合法 Unicode 文本都是全函数，不会失败；
/// 规则不保留调用间状态，可跨线程并发调用
pub trait Rule: Send + Sync {
    /// 规则名（用于日志）
    fn name(&self) -> &'static str;

    /// 应用规则
    fn apply(&self, text: &str) -> String;
}

/// 大写转小写
///
/// 完整 Unicode 大小写折叠，非仅 ASCII
#[derive(Debug, Clone, Copy, Default)]
pub struct Lower;

impl Rule for Lower {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn apply(&self, text: &str) -> String {
        text.to_lowercase()
    }
}

/// 全角转半角
///
/// 全角 ASCII 变体 (U+FF01..U+FF5E) 映射为对应半角字符，
/// 全角空格 (U+3000) 映射为 ASCII 空格，其余字符原样保留
#[derive(Debug, Clone, Copy, Default)]
pub struct FullwidthToHalfwidth;

impl Rule for FullwidthToHalfwidth {
    fn name(&self) -> &'static str {
        "fullwidth_to_halfwidth"
    }

    fn apply(&self, text: &str) -> String {
        text.chars()
            .map(|ch| match ch {
                '\u{3000}' => ' ',
                '\u{FF01}'..='\u{FF5E}' => {
                    char::from_u32(ch as u32 - 0xFEE0).unwrap_or(ch)
                }
                _ => ch,
            })
            .collect()
    }
}

/// 按归一化形式转换文本
fn apply_form(form: Form, text: &str) -> String {
    match form {
        Form::Nfc => text.nfc().collect(),
        Form::Nfkc => text.nfkc().collect(),
        Form::Nfd => text.nfd().collect(),
        Form::Nfkd => text.nfkd().collect(),
    }
}

/// Unicode 归一化
///
/// 委托给 unicode-normalization，默认 NFKC
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalize {
    pub form: Form,
}

impl Normalize {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for Normalize {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn apply(&self, text: &str) -> String {
        apply_form(self.form, text)
    }
}

/// 连字符族，折叠为 ASCII '-'
const DASHES: &[char] = &[
    '\u{02D7}', // 修饰负号
    '\u{2010}', // 连字符
    '\u{2011}', // 不换行连字符
    '\u{2012}', // 数字破折号
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // 水平线
    '\u{2043}', // 连字符项目符
    '\u{207B}', // 上标负号
    '\u{208B}', // 下标负号
    '\u{2212}', // 数学减号
    '\u{FE58}', // 小型 em dash
    '\u{FE63}', // 小型连字符
    '\u{FF0D}', // 全角连字符
];

/// Unicode 归一化 + 连字符折叠
///
/// 标准归一化形式不统一视觉相近的连字符码位，
/// 此规则先将连字符族折叠为 ASCII '-'，再做 Unicode 归一化
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeDashes {
    pub form: Form,
}

impl NormalizeDashes {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for NormalizeDashes {
    fn name(&self) -> &'static str {
        "normalize_dashes"
    }

    fn apply(&self, text: &str) -> String {
        let folded: String = text
            .chars()
            .map(|ch| if DASHES.contains(&ch) { '-' } else { ch })
            .collect();
        apply_form(self.form, &folded)
    }
}

/// 空白折叠
///
/// 连续空白折叠为单个空格，并去除首尾空白
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldWhitespace;

impl Rule for FoldWhitespace {
    fn name(&self) -> &'static str {
        "fold_whitespace"
    }

    fn apply(&self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        let mut prev_whitespace = false;

        for ch in text.chars() {
            if ch.is_whitespace() {
                if !prev_whitespace {
                    result.push(' ');
                    prev_whitespace = true;
                }
            } else {
                result.push(ch);
                prev_whitespace = false;
            }
        }

        result.trim().to_string()
    }
}
