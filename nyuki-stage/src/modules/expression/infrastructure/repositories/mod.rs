// Repository Implementations

mod file_state_repository;
mod in_memory_state_repository;

pub use file_state_repository::*;
pub use in_memory_state_repository::*;
