// Config Module
//
// 表情舞台配置模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体
// - ports: 端口层，定义配置读写的抽象接口
// - infrastructure: 基础设施层，实现具体的配置存储适配器

pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use domain::{PartialStageConfig, StageConfig, DEFAULT_CHARACTER_NAME};
pub use infrastructure::{FileConfigRepository, InMemoryConfigRepository};
pub use ports::{ConfigError, ConfigRepository};

use std::sync::Arc;

/// Config 模块容器
///
/// 管理模块内的依赖注入
pub struct ConfigModule {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigModule {
    /// 使用内存仓储创建（用于测试）
    pub fn new_in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryConfigRepository::new()))
    }

    /// 使用文件存储创建
    pub fn new_with_store(data_dir: std::path::PathBuf) -> Self {
        Self::with_repository(Arc::new(FileConfigRepository::new(data_dir)))
    }

    /// 使用自定义仓储创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.repository
    }

    /// 获取配置
    pub async fn get(&self) -> Result<StageConfig, ConfigError> {
        self.repository.load().await
    }

    /// 更新配置
    pub async fn update(&self, partial: PartialStageConfig) -> Result<StageConfig, ConfigError> {
        let mut config = self.repository.load().await?;
        config.merge(partial);
        config
            .validate()
            .map_err(|errors| ConfigError::ValidationError { errors })?;

        self.repository.save(&config).await?;
        tracing::info!("Stage config updated");
        Ok(config)
    }

    /// 重置配置
    pub async fn reset(&self) -> Result<StageConfig, ConfigError> {
        self.repository.clear().await?;
        let config = StageConfig::default();
        self.repository.save(&config).await?;
        Ok(config)
    }
}
