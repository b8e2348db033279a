//! 规则链
//!
//! 按调用方给定顺序依次应用规则，前一条输出作为后一条输入

use std::time::Instant;

use crate::rule::Rule;
use crate::types::RuleConfig;

/// 规则链（可复用，构造后不可变）
///
/// 规则顺序即应用顺序，不做重排、去重或相容性校验；
/// 空链等价于恒等变换
pub struct Chain {
    rules: Vec<Box<dyn Rule>>,
}

impl Chain {
    /// 创建规则链
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// 从配置构建规则链
    pub fn from_config(rules: &[RuleConfig]) -> Self {
        Self::new(rules.iter().map(|rule| rule.build()).collect())
    }

    /// 应用规则链
    ///
    /// 纯函数，输入依次流经每条规则，返回最终输出
    pub fn apply(&self, text: &str) -> String {
        let start = Instant::now();
        let mut text = text.to_string();

        for rule in &self.rules {
            text = rule.apply(&text);
            tracing::debug!("规则 {} 应用完成, 输出 {} 字符", rule.name(), text.chars().count());
        }

        tracing::debug!(
            "规则链应用完成: {} 条规则, 耗时 {}us",
            self.rules.len(),
            start.elapsed().as_micros()
        );
        text
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
