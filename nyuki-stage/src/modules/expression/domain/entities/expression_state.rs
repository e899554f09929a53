use serde::{Deserialize, Serialize};

use super::super::value_objects::Expression;

/// 表情状态 - 聚合根
///
/// 每个会话独占一份，只会被覆盖，不会在会话内删除。
/// 序列化格式 `{"currentExpression": "<name>"}` 即完整的持久化结构。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionState {
    current_expression: Expression,
}

impl ExpressionState {
    /// 会话开始时初始化
    ///
    /// 优先级：已持久化的值 > 配置的默认值 > Neutral
    pub fn initialize(persisted: Option<Expression>, default: Option<Expression>) -> Self {
        Self {
            current_expression: persisted.or(default).unwrap_or_default(),
        }
    }

    /// 用外部存储交回的值覆盖当前状态，None 时保持不变
    pub fn restore(&mut self, persisted: Option<Expression>) {
        if let Some(expression) = persisted {
            self.current_expression = expression;
        }
    }

    /// 记录一次分类结果
    pub fn record_classification(&mut self, expression: Expression) {
        self.current_expression = expression;
    }

    pub fn current(&self) -> Expression {
        self.current_expression
    }
}

impl Default for ExpressionState {
    fn default() -> Self {
        Self::initialize(None, None)
    }
}

impl From<Expression> for ExpressionState {
    fn from(expression: Expression) -> Self {
        Self::initialize(Some(expression), None)
    }
}
