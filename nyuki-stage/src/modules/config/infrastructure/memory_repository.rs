// In-Memory Config Repository
//
// 基于内存的配置仓储实现（用于测试和开发）

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::config::domain::StageConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 内存配置仓储
pub struct InMemoryConfigRepository {
    config: RwLock<Option<StageConfig>>,
}

impl InMemoryConfigRepository {
    pub fn new() -> Self {
        Self {
            config: RwLock::new(None),
        }
    }

    pub fn with_config(config: StageConfig) -> Self {
        Self {
            config: RwLock::new(Some(config)),
        }
    }
}

impl Default for InMemoryConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigRepository for InMemoryConfigRepository {
    async fn load(&self) -> Result<StageConfig, ConfigError> {
        let config = self.config.read().await;
        Ok(config.clone().unwrap_or_default())
    }

    async fn save(&self, config: &StageConfig) -> Result<(), ConfigError> {
        let mut current = self.config.write().await;
        *current = Some(config.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        let mut config = self.config.write().await;
        *config = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        let config = self.config.read().await;
        Ok(config.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::expression::domain::Expression;

    #[tokio::test]
    async fn test_load_default_config() {
        let repo = InMemoryConfigRepository::new();
        let config = repo.load().await.unwrap();
        assert_eq!(config, StageConfig::default());
        assert!(!repo.exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_save_and_clear() {
        let repo = InMemoryConfigRepository::new();
        let mut config = StageConfig::default();
        config.default_expression = Some(Expression::Joy);

        repo.save(&config).await.unwrap();
        assert_eq!(repo.load().await.unwrap().default_expression, Some(Expression::Joy));

        repo.clear().await.unwrap();
        assert_eq!(repo.load().await.unwrap().default_expression, None);
    }
}
