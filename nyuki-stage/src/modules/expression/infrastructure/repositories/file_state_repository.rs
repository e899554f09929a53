// 文件持久化表情状态仓储实现
//
// 使用 JSON 文件存储各会话的表情状态

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::RwLock;

use crate::modules::expression::domain::{ExpressionState, SessionId};
use crate::modules::expression::ports::{ExpressionStateRepository, RepositoryError};

const STATE_FILE_NAME: &str = "expression_states.json";

/// 持久化数据结构
#[derive(Debug, Serialize, Deserialize, Default)]
struct StateStore {
    states: HashMap<String, ExpressionState>,
}

/// 文件持久化表情状态仓储
pub struct FileExpressionStateRepository {
    store: RwLock<StateStore>,
    file_path: PathBuf,
}

impl FileExpressionStateRepository {
    /// 创建新的文件仓储
    ///
    /// # Arguments
    /// * `data_dir` - 数据目录路径
    ///
    /// # Errors
    /// 目录无法创建、文件无法读取或内容包含未知表情时返回错误
    pub async fn new(data_dir: PathBuf) -> Result<Self, RepositoryError> {
        let file_path = data_dir.join(STATE_FILE_NAME);

        // 确保目录存在
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        }

        let store = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .await
                .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

            serde_json::from_str(&content)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
        } else {
            StateStore::default()
        };

        tracing::debug!(
            path = %file_path.display(),
            sessions = store.states.len(),
            "Expression state store loaded"
        );

        Ok(Self {
            store: RwLock::new(store),
            file_path,
        })
    }

    /// 将数据持久化到文件
    async fn persist(&self) -> Result<(), RepositoryError> {
        let store = self.store.read().await;
        let content = serde_json::to_string_pretty(&*store)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.file_path, content)
            .await
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ExpressionStateRepository for FileExpressionStateRepository {
    async fn get(&self, session_id: SessionId) -> Result<Option<ExpressionState>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.states.get(&session_id.to_string()).copied())
    }

    async fn save(
        &self,
        session_id: SessionId,
        state: &ExpressionState,
    ) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.states.insert(session_id.to_string(), *state);
        }
        self.persist().await
    }

    async fn delete(&self, session_id: SessionId) -> Result<(), RepositoryError> {
        {
            let mut store = self.store.write().await;
            store.states.remove(&session_id.to_string());
        }
        self.persist().await
    }

    async fn exists(&self, session_id: SessionId) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.states.contains_key(&session_id.to_string()))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.states.len())
    }
}
