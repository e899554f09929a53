// Commands - 命令处理器

mod classify_message;
mod restore_state;
mod start_session;

pub use classify_message::*;
pub use restore_state::*;
pub use start_session::*;
