// Expression Infrastructure Layer
// 基础设施层实现端口的具体适配器

pub mod repositories;

pub use repositories::*;
