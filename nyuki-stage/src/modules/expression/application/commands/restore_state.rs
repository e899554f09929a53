use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::expression::domain::{
    Expression, ExpressionRestoredEvent, ExpressionState, SessionId,
};
use crate::modules::expression::ports::ExpressionStateRepository;

/// 恢复状态命令
///
/// 宿主从外部存储交回之前保存的表情；`persisted` 为 None 时不做任何修改
#[derive(Debug, Clone)]
pub struct RestoreStateCommand {
    pub session_id: SessionId,
    pub persisted: Option<Expression>,
}

impl RestoreStateCommand {
    pub fn new(session_id: SessionId, persisted: Option<Expression>) -> Self {
        Self {
            session_id,
            persisted,
        }
    }
}

/// 恢复状态响应
#[derive(Debug, Clone)]
pub struct RestoreStateResponse {
    pub state: ExpressionState,
    pub event: Option<ExpressionRestoredEvent>,
}

/// 恢复状态处理器
pub struct RestoreStateHandler {
    state_repository: Arc<dyn ExpressionStateRepository>,
}

impl RestoreStateHandler {
    pub fn new(state_repository: Arc<dyn ExpressionStateRepository>) -> Self {
        Self { state_repository }
    }
}

#[async_trait]
impl CommandHandler<RestoreStateCommand, RestoreStateResponse> for RestoreStateHandler {
    async fn handle(
        &self,
        command: RestoreStateCommand,
    ) -> Result<RestoreStateResponse, ApplicationError> {
        let mut state = self
            .state_repository
            .get(command.session_id)
            .await?
            .ok_or_else(|| ApplicationError::SessionNotFound(command.session_id.to_string()))?;

        let Some(expression) = command.persisted else {
            return Ok(RestoreStateResponse { state, event: None });
        };

        state.restore(Some(expression));
        self.state_repository
            .save(command.session_id, &state)
            .await?;

        tracing::debug!(
            session_id = %command.session_id,
            %expression,
            "Expression state restored"
        );

        Ok(RestoreStateResponse {
            state,
            event: Some(ExpressionRestoredEvent::new(command.session_id, expression)),
        })
    }
}
