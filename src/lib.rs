//! 规则链文本规范化
//!
//! 将文本依次流经一组可独立测试的纯变换规则，使异构写法收敛到规范形式，
//! 用于检索、匹配等下游分析前的预处理。
//!
//! ## 规则一览
//! - [`Lower`] — Unicode 大小写折叠
//! - [`FullwidthToHalfwidth`] — 全角转半角
//! - [`Normalize`] / [`NormalizeDashes`] — Unicode 归一化（后者附带连字符折叠）
//! - [`GreekToAlpha`] — 希腊字母转拉丁字母名
//! - [`RomanToArabic`] — 罗马数字符号展开为数词
//! - [`WordsToDigits`] — 数词短语转数字
//! - [`FoldWhitespace`] — 空白折叠
//!
//! 规则与规则链构造一次、重复使用，不保留调用间状态，可跨线程并发调用。

mod chain;
mod greek;
mod numwords;
mod roman;
mod rule;
mod types;

pub use chain::Chain;
pub use greek::{GreekLetterMap, GreekToAlpha};
pub use numwords::{parse_number_phrase, WordsToDigits};
pub use roman::RomanToArabic;
pub use rule::{FoldWhitespace, FullwidthToHalfwidth, Lower, Normalize, NormalizeDashes, Rule};
pub use types::{Case, Form, RuleConfig};
