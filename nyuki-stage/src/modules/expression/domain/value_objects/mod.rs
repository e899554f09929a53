// Expression Domain - Value Objects
// 值对象是不可变的，通过值而非标识来比较

mod display_size;
mod expression;
mod session_id;

pub use display_size::*;
pub use expression::*;
pub use session_id::*;
