// Expression Ports Layer
//
// 定义表情模块的端口（接口）

mod state_repository;

pub use state_repository::*;
