// Expression Domain - Entities

mod expression_state;

pub use expression_state::*;
