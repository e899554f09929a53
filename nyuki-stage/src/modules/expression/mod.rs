// Expression Module - 表情模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含表情值对象、规则表、分类器、会话状态和领域事件
// - ports: 端口层，定义状态持久化的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    ApplicationError, ClassifyMessageCommand, ClassifyMessageHandler, ClassifyMessageResponse,
    CommandHandler, GetExpressionHandler, GetExpressionQuery, GetExpressionResponse,
    QueryHandler, RenderExpressionHandler, RenderExpressionQuery, RenderExpressionResponse,
    RestoreStateCommand, RestoreStateHandler, RestoreStateResponse, StartSessionCommand,
    StartSessionHandler, StartSessionResponse,
};

pub use domain::{
    Classification, DisplaySize, Expression, ExpressionClassifier, ExpressionDomainEvent,
    ExpressionFamily, ExpressionState, ExpressionView, MatchBasis, RuleEntry, RuleTable,
    SessionId,
};

pub use infrastructure::{FileExpressionStateRepository, InMemoryExpressionStateRepository};

pub use ports::{ExpressionStateRepository, RepositoryError};

use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::infrastructure::EventBus;
use crate::modules::config::{ConfigRepository, FileConfigRepository, InMemoryConfigRepository};

/// 加载结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub success: bool,
    pub error: Option<String>,
}

/// 生命周期钩子返回给宿主的结果
///
/// `message_state` 由宿主负责持久化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageResponse {
    pub message_state: ExpressionState,
}

/// Expression 模块容器
///
/// 管理模块内的依赖注入，并对宿主暴露舞台生命周期
pub struct ExpressionModule {
    state_repository: Arc<dyn ExpressionStateRepository>,
    config_repository: Arc<dyn ConfigRepository>,
    event_bus: Arc<EventBus>,
    // Handlers
    start_session_handler: StartSessionHandler,
    restore_state_handler: RestoreStateHandler,
    classify_message_handler: ClassifyMessageHandler,
    get_expression_handler: GetExpressionHandler,
    render_expression_handler: RenderExpressionHandler,
}

impl ExpressionModule {
    /// 创建使用内存存储的实例（用于开发测试）
    pub fn new() -> Self {
        Self::with_repositories(
            Arc::new(InMemoryExpressionStateRepository::new()),
            Arc::new(InMemoryConfigRepository::new()),
            Arc::new(EventBus::new()),
        )
    }

    /// 创建带持久化存储的实例
    ///
    /// # Arguments
    /// * `data_dir` - 数据目录路径，存放表情状态与配置文件
    /// * `event_bus` - 事件总线
    ///
    /// # Errors
    /// 如果无法初始化文件存储，返回错误
    pub async fn new_with_persistence(
        data_dir: PathBuf,
        event_bus: Arc<EventBus>,
    ) -> Result<Self, RepositoryError> {
        let state_repository: Arc<dyn ExpressionStateRepository> =
            Arc::new(FileExpressionStateRepository::new(data_dir.clone()).await?);
        let config_repository: Arc<dyn ConfigRepository> =
            Arc::new(FileConfigRepository::new(data_dir));

        Ok(Self::with_repositories(
            state_repository,
            config_repository,
            event_bus,
        ))
    }

    /// 使用自定义仓储创建
    pub fn with_repositories(
        state_repository: Arc<dyn ExpressionStateRepository>,
        config_repository: Arc<dyn ConfigRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            start_session_handler: StartSessionHandler::new(state_repository.clone()),
            restore_state_handler: RestoreStateHandler::new(state_repository.clone()),
            classify_message_handler: ClassifyMessageHandler::new(state_repository.clone()),
            get_expression_handler: GetExpressionHandler::new(state_repository.clone()),
            render_expression_handler: RenderExpressionHandler::new(
                state_repository.clone(),
                config_repository.clone(),
            ),
            state_repository,
            config_repository,
            event_bus,
        }
    }

    // Lifecycle hooks

    /// 加载舞台
    pub async fn load(&self) -> LoadResponse {
        LoadResponse {
            success: true,
            error: None,
        }
    }

    /// 开始会话
    ///
    /// 配置在此读取一次；初始表情优先级为 persisted > 已保存状态 > 配置默认值 > Neutral
    pub async fn start_session(
        &self,
        session_id: SessionId,
        persisted: Option<Expression>,
    ) -> Result<StageResponse, ApplicationError> {
        let config = self.config_repository.load().await?;

        let response = self
            .start_session_handler
            .handle(StartSessionCommand::new(
                session_id,
                persisted,
                config.default_expression,
            ))
            .await?;

        self.event_bus
            .publish(ExpressionDomainEvent::Initialized(response.event));

        Ok(StageResponse {
            message_state: response.state,
        })
    }

    /// 宿主交回外部保存的状态
    pub async fn set_state(
        &self,
        session_id: SessionId,
        persisted: Option<Expression>,
    ) -> Result<StageResponse, ApplicationError> {
        let response = self
            .restore_state_handler
            .handle(RestoreStateCommand::new(session_id, persisted))
            .await?;

        if let Some(event) = response.event {
            self.event_bus.publish(ExpressionDomainEvent::Restored(event));
        }

        Ok(StageResponse {
            message_state: response.state,
        })
    }

    /// 用户消息发送前：不修改状态，只导出当前值
    pub async fn before_prompt(
        &self,
        session_id: SessionId,
    ) -> Result<StageResponse, ApplicationError> {
        let state = self
            .current_state(session_id)
            .await?
            .ok_or_else(|| ApplicationError::SessionNotFound(session_id.to_string()))?;

        Ok(StageResponse {
            message_state: state,
        })
    }

    /// bot 回复后：分类并覆盖当前表情
    pub async fn after_response(
        &self,
        session_id: SessionId,
        content: &str,
    ) -> Result<StageResponse, ApplicationError> {
        let response = self
            .classify_message_handler
            .handle(ClassifyMessageCommand::new(session_id, content))
            .await?;

        self.event_bus
            .publish(ExpressionDomainEvent::Changed(response.event));

        Ok(StageResponse {
            message_state: response.state,
        })
    }

    /// 生成当前表情的展示视图
    pub async fn render(&self, session_id: SessionId) -> Result<ExpressionView, ApplicationError> {
        let response = self
            .render_expression_handler
            .handle(RenderExpressionQuery::new(session_id))
            .await?;
        Ok(response.view)
    }

    // Queries

    /// 获取会话当前状态
    pub async fn current_state(
        &self,
        session_id: SessionId,
    ) -> Result<Option<ExpressionState>, ApplicationError> {
        let response = self
            .get_expression_handler
            .handle(GetExpressionQuery::new(session_id))
            .await?;
        Ok(response.state)
    }

    // Accessors

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    pub fn state_repository(&self) -> &Arc<dyn ExpressionStateRepository> {
        &self.state_repository
    }

    pub fn config_repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.config_repository
    }
}

impl Default for ExpressionModule {
    fn default() -> Self {
        Self::new()
    }
}
