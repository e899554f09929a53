use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::super::value_objects::Expression;
use super::rule_table::RuleTable;

/// 分类依据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum MatchBasis {
    /// 文本中的显式标签，如 `[joy]`
    ExplicitTag(String),
    /// 命中的规则模式
    Pattern(String),
    /// 无任何命中
    Fallback,
}

/// 分类结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub expression: Expression,
    pub basis: MatchBasis,
}

/// 表情分类器
///
/// 领域服务：将一段回复文本映射为唯一的表情。
/// 纯函数，不读写会话状态。
#[derive(Debug, Clone, Copy)]
pub struct ExpressionClassifier {
    table: &'static RuleTable,
}

impl ExpressionClassifier {
    /// 使用全局规则表创建分类器
    pub fn new() -> Self {
        Self {
            table: RuleTable::global(),
        }
    }

    /// 分类文本，总是返回一个表情
    pub fn classify(&self, text: &str) -> Expression {
        self.classify_detailed(text).expression
    }

    /// 分类文本并给出依据
    ///
    /// 顺序：显式标签 -> 规则表扫描 -> Neutral
    pub fn classify_detailed(&self, text: &str) -> Classification {
        if let Some(classification) = self.detect_explicit_tag(text) {
            return classification;
        }

        for entry in self.table.ordered_entries() {
            if let Some(pattern) = entry.first_match(text) {
                tracing::debug!(
                    expression = %entry.expression(),
                    pattern = pattern.as_str(),
                    "Expression matched by pattern"
                );
                return Classification {
                    expression: entry.expression(),
                    basis: MatchBasis::Pattern(pattern.as_str().to_string()),
                };
            }
        }

        Classification {
            expression: Expression::Neutral,
            basis: MatchBasis::Fallback,
        }
    }

    /// 只检查文本中的第一个 `[word]` 标签，之后的标签忽略
    fn detect_explicit_tag(&self, text: &str) -> Option<Classification> {
        static TAG_RE: OnceLock<Regex> = OnceLock::new();
        let re = TAG_RE
            .get_or_init(|| Regex::new(r"\[([A-Za-z0-9_]+)\]").expect("valid tag regex"));

        let tag = re.captures(text)?.get(1)?.as_str().to_lowercase();

        let labels = self.table.all_labels();
        match Expression::from_tag(&tag) {
            Some(expression) if labels.contains(&expression) => {
                tracing::debug!(%expression, tag = %tag, "Expression set by explicit tag");
                Some(Classification {
                    expression,
                    basis: MatchBasis::ExplicitTag(tag),
                })
            }
            _ => {
                tracing::debug!(tag = %tag, "Ignoring unknown expression tag");
                None
            }
        }
    }
}

impl Default for ExpressionClassifier {
    fn default() -> Self {
        Self::new()
    }
}
