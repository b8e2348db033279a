//! 配置值类型
//!
//! 大小写、归一化形式与规则配置均为封闭枚举，随配置数据序列化

use serde::{Deserialize, Serialize};

use crate::greek::GreekToAlpha;
use crate::numwords::WordsToDigits;
use crate::roman::RomanToArabic;
use crate::rule::{FoldWhitespace, FullwidthToHalfwidth, Lower, Normalize, NormalizeDashes, Rule};

/// 字母名大小写
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// 全大写
    Upper,
    /// 全小写
    Lower,
}

/// Unicode 归一化形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    Nfc,
    /// 默认形式
    #[default]
    Nfkc,
    Nfd,
    Nfkd,
}

/// 规则配置
///
/// 每个变体对应一条规则及其构造参数，可从配置数据反序列化后
/// 经 [`RuleConfig::build`] 实例化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleConfig {
    Lower,
    FullwidthToHalfwidth,
    Normalize {
        #[serde(default)]
        form: Form,
    },
    NormalizeDashes {
        #[serde(default)]
        form: Form,
    },
    GreekToAlpha {
        /// None 时名称跟随字母本身大小写
        #[serde(default)]
        case: Option<Case>,
    },
    RomanToArabic {
        /// 默认小写数词
        #[serde(default = "default_roman_case")]
        case: Option<Case>,
    },
    WordsToDigits,
    FoldWhitespace,
}

fn default_roman_case() -> Option<Case> {
    Some(Case::Lower)
}

impl RuleConfig {
    /// 按配置实例化规则
    pub fn build(&self) -> Box<dyn Rule> {
        match *self {
            RuleConfig::Lower => Box::new(Lower),
            RuleConfig::FullwidthToHalfwidth => Box::new(FullwidthToHalfwidth),
            RuleConfig::Normalize { form } => Box::new(Normalize { form }),
            RuleConfig::NormalizeDashes { form } => Box::new(NormalizeDashes { form }),
            RuleConfig::GreekToAlpha { case } => {
                let mut rule = GreekToAlpha::new();
                rule.case = case;
                Box::new(rule)
            }
            RuleConfig::RomanToArabic { case } => Box::new(RomanToArabic { case }),
            RuleConfig::WordsToDigits => Box::new(WordsToDigits),
            RuleConfig::FoldWhitespace => Box::new(FoldWhitespace),
        }
    }
}
