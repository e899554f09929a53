use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::expression::domain::{ExpressionState, SessionId};
use crate::modules::expression::ports::{ExpressionStateRepository, RepositoryError};

/// 内存表情状态仓储
///
/// 用于开发和测试
pub struct InMemoryExpressionStateRepository {
    states: RwLock<HashMap<SessionId, ExpressionState>>,
}

impl InMemoryExpressionStateRepository {
    pub fn new() -> Self {
        Self {
            states: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryExpressionStateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpressionStateRepository for InMemoryExpressionStateRepository {
    async fn get(&self, session_id: SessionId) -> Result<Option<ExpressionState>, RepositoryError> {
        let states = self.states.read().await;
        Ok(states.get(&session_id).copied())
    }

    async fn save(
        &self,
        session_id: SessionId,
        state: &ExpressionState,
    ) -> Result<(), RepositoryError> {
        let mut states = self.states.write().await;
        states.insert(session_id, *state);
        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> Result<(), RepositoryError> {
        let mut states = self.states.write().await;
        states.remove(&session_id);
        Ok(())
    }

    async fn exists(&self, session_id: SessionId) -> Result<bool, RepositoryError> {
        let states = self.states.read().await;
        Ok(states.contains_key(&session_id))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let states = self.states.read().await;
        Ok(states.len())
    }
}
