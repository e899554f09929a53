// Expression Domain Layer
// 领域层包含表情值对象、规则表、分类器、会话状态与领域事件

pub mod entities;
pub mod events;
pub mod services;
pub mod value_objects;

// 重导出常用类型
pub use entities::ExpressionState;
pub use events::*;
pub use services::{
    Classification, ExpressionClassifier, ExpressionView, MatchBasis, RuleEntry, RuleTable,
};
pub use value_objects::{DisplaySize, Expression, ExpressionFamily, SessionId, SPECIAL_PREFIX};
