// Queries - 查询处理器

mod get_expression;
mod render_expression;

pub use get_expression::*;
pub use render_expression::*;
