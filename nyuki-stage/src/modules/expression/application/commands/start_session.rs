use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::expression::domain::{
    Expression, ExpressionInitializedEvent, ExpressionState, SessionId,
};
use crate::modules::expression::ports::ExpressionStateRepository;

/// 开始会话命令
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub session_id: SessionId,
    /// 宿主交回的已持久化表情
    pub persisted: Option<Expression>,
    /// 配置中的默认表情
    pub default_expression: Option<Expression>,
}

impl StartSessionCommand {
    pub fn new(
        session_id: SessionId,
        persisted: Option<Expression>,
        default_expression: Option<Expression>,
    ) -> Self {
        Self {
            session_id,
            persisted,
            default_expression,
        }
    }
}

/// 开始会话响应
#[derive(Debug, Clone)]
pub struct StartSessionResponse {
    pub state: ExpressionState,
    pub event: ExpressionInitializedEvent,
}

/// 开始会话处理器
pub struct StartSessionHandler {
    state_repository: Arc<dyn ExpressionStateRepository>,
}

impl StartSessionHandler {
    pub fn new(state_repository: Arc<dyn ExpressionStateRepository>) -> Self {
        Self { state_repository }
    }
}

#[async_trait]
impl CommandHandler<StartSessionCommand, StartSessionResponse> for StartSessionHandler {
    async fn handle(
        &self,
        command: StartSessionCommand,
    ) -> Result<StartSessionResponse, ApplicationError> {
        // 未显式提供时使用仓储中保存的状态
        let persisted = match command.persisted {
            Some(expression) => Some(expression),
            None => self
                .state_repository
                .get(command.session_id)
                .await?
                .map(|state| state.current()),
        };

        let state = ExpressionState::initialize(persisted, command.default_expression);
        self.state_repository
            .save(command.session_id, &state)
            .await?;

        tracing::info!(
            session_id = %command.session_id,
            expression = %state.current(),
            "Expression session started"
        );

        Ok(StartSessionResponse {
            state,
            event: ExpressionInitializedEvent::new(command.session_id, state.current()),
        })
    }
}
