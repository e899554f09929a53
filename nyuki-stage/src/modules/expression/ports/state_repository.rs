use async_trait::async_trait;
use thiserror::Error;

use super::super::domain::{ExpressionState, SessionId};

/// 仓储错误类型
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 表情状态仓储端口
///
/// 持久化边界：每个会话保存一份 `ExpressionState`
#[async_trait]
pub trait ExpressionStateRepository: Send + Sync {
    /// 根据会话 ID 获取状态
    async fn get(&self, session_id: SessionId) -> Result<Option<ExpressionState>, RepositoryError>;

    /// 保存状态（创建或覆盖）
    async fn save(
        &self,
        session_id: SessionId,
        state: &ExpressionState,
    ) -> Result<(), RepositoryError>;

    /// 删除会话状态
    async fn delete(&self, session_id: SessionId) -> Result<(), RepositoryError>;

    /// 检查会话状态是否存在
    async fn exists(&self, session_id: SessionId) -> Result<bool, RepositoryError>;

    /// 已保存的会话数量
    async fn count(&self) -> Result<usize, RepositoryError>;
}
