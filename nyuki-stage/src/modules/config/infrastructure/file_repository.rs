// File-based Config Repository
//
// 基于 JSON 文件的配置仓储实现

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::RwLock;

use crate::modules::config::domain::StageConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

const CONFIG_FILE_NAME: &str = "config.json";

/// 文件配置仓储
pub struct FileConfigRepository {
    /// 配置文件路径
    config_path: PathBuf,
    /// 内存缓存
    cache: RwLock<Option<StageConfig>>,
}

impl FileConfigRepository {
    /// 创建新的文件配置仓储
    ///
    /// # Arguments
    /// * `data_dir` - 数据目录
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            config_path: data_dir.join(CONFIG_FILE_NAME),
            cache: RwLock::new(None),
        }
    }

    /// 从文件加载配置
    async fn load_from_file(&self) -> Result<Option<StageConfig>, ConfigError> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))?;

        let config: StageConfig = serde_json::from_str(&content)?;

        Ok(Some(config))
    }

    /// 保存配置到文件
    async fn save_to_file(&self, config: &StageConfig) -> Result<(), ConfigError> {
        // 确保目录存在
        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(config)?;

        tokio::fs::write(&self.config_path, content)
            .await
            .map_err(|e| ConfigError::StorageError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ConfigRepository for FileConfigRepository {
    async fn load(&self) -> Result<StageConfig, ConfigError> {
        // 先检查缓存
        {
            let cache = self.cache.read().await;
            if let Some(ref config) = *cache {
                return Ok(config.clone());
            }
        }

        let config = self.load_from_file().await?.unwrap_or_default();
        tracing::debug!(path = %self.config_path.display(), "Stage config loaded");

        // 更新缓存
        {
            let mut cache = self.cache.write().await;
            *cache = Some(config.clone());
        }

        Ok(config)
    }

    async fn save(&self, config: &StageConfig) -> Result<(), ConfigError> {
        self.save_to_file(config).await?;

        {
            let mut cache = self.cache.write().await;
            *cache = Some(config.clone());
        }

        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        if self.config_path.exists() {
            tokio::fs::remove_file(&self.config_path)
                .await
                .map_err(|e| ConfigError::StorageError(e.to_string()))?;
        }

        {
            let mut cache = self.cache.write().await;
            *cache = None;
        }

        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(self.config_path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::expression::domain::{DisplaySize, Expression};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileConfigRepository::new(temp_dir.path().to_path_buf());

        assert!(!repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), StageConfig::default());
    }

    #[tokio::test]
    async fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        {
            let repo = FileConfigRepository::new(path.clone());
            let mut config = StageConfig::default();
            config.default_expression = Some(Expression::Curiosity);
            config.image_size = DisplaySize::Medium;
            repo.save(&config).await.unwrap();
        }

        let repo = FileConfigRepository::new(path);
        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.default_expression, Some(Expression::Curiosity));
        assert_eq!(loaded.image_size, DisplaySize::Medium);
    }

    #[tokio::test]
    async fn test_invalid_expression_in_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"{"defaultExpression":"smug"}"#,
        )
        .unwrap();

        let repo = FileConfigRepository::new(temp_dir.path().to_path_buf());
        assert!(matches!(
            repo.load().await,
            Err(ConfigError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileConfigRepository::new(temp_dir.path().to_path_buf());

        repo.save(&StageConfig::default()).await.unwrap();
        assert!(repo.exists().await.unwrap());

        repo.clear().await.unwrap();
        assert!(!repo.exists().await.unwrap());
    }
}
