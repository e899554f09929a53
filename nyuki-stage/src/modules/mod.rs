// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - expression: 表情模块，分类 bot 消息并维护会话表情状态
// - config: 配置模块，处理舞台设置

pub mod config;
pub mod expression;

pub use config::ConfigModule;
pub use expression::ExpressionModule;
