// Expression Domain - Services
// 领域服务：规则表、分类器与展示视图

mod classifier;
mod rule_table;
mod view;

pub use classifier::*;
pub use rule_table::*;
pub use view::*;
