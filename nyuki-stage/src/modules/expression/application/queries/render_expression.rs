use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::config::ConfigRepository;
use crate::modules::expression::domain::{ExpressionView, SessionId};
use crate::modules::expression::ports::ExpressionStateRepository;

/// 渲染表情查询
#[derive(Debug, Clone)]
pub struct RenderExpressionQuery {
    pub session_id: SessionId,
}

impl RenderExpressionQuery {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// 渲染表情响应
#[derive(Debug, Clone)]
pub struct RenderExpressionResponse {
    pub view: ExpressionView,
}

/// 渲染表情处理器
///
/// 根据会话当前表情和显示配置生成视图
pub struct RenderExpressionHandler {
    state_repository: Arc<dyn ExpressionStateRepository>,
    config_repository: Arc<dyn ConfigRepository>,
}

impl RenderExpressionHandler {
    pub fn new(
        state_repository: Arc<dyn ExpressionStateRepository>,
        config_repository: Arc<dyn ConfigRepository>,
    ) -> Self {
        Self {
            state_repository,
            config_repository,
        }
    }
}

#[async_trait]
impl QueryHandler<RenderExpressionQuery, RenderExpressionResponse> for RenderExpressionHandler {
    async fn handle(
        &self,
        query: RenderExpressionQuery,
    ) -> Result<RenderExpressionResponse, ApplicationError> {
        let state = self
            .state_repository
            .get(query.session_id)
            .await?
            .ok_or_else(|| ApplicationError::SessionNotFound(query.session_id.to_string()))?;

        let config = self.config_repository.load().await?;
        let view = ExpressionView::new(state.current(), &config.character_name, config.image_size);

        Ok(RenderExpressionResponse { view })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::{InMemoryConfigRepository, StageConfig};
    use crate::modules::expression::domain::{DisplaySize, Expression, ExpressionState};
    use crate::modules::expression::infrastructure::InMemoryExpressionStateRepository;

    #[tokio::test]
    async fn test_render_uses_config() {
        let states = Arc::new(InMemoryExpressionStateRepository::new());
        let id = SessionId::new();
        states
            .save(id, &ExpressionState::from(Expression::Arrogant))
            .await
            .unwrap();

        let mut config = StageConfig::default();
        config.image_size = DisplaySize::Small;
        config.character_name = "Yuki".to_string();

        let handler = RenderExpressionHandler::new(
            states,
            Arc::new(InMemoryConfigRepository::with_config(config)),
        );
        let response = handler
            .handle(RenderExpressionQuery::new(id))
            .await
            .unwrap();

        assert_eq!(
            response.view.image_path,
            "/expressions/special_arrogant.png"
        );
        assert_eq!(response.view.alt_text, "Yuki - special_arrogant");
        assert_eq!(response.view.caption, "Arrogant");
        assert_eq!(response.view.size, DisplaySize::Small);
    }

    #[tokio::test]
    async fn test_render_unknown_session() {
        let handler = RenderExpressionHandler::new(
            Arc::new(InMemoryExpressionStateRepository::new()),
            Arc::new(InMemoryConfigRepository::new()),
        );

        let result = handler
            .handle(RenderExpressionQuery::new(SessionId::new()))
            .await;
        assert!(matches!(result, Err(ApplicationError::SessionNotFound(_))));
    }
}
