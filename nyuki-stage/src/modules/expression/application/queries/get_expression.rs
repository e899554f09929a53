use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, QueryHandler};
use crate::modules::expression::domain::{ExpressionState, SessionId};
use crate::modules::expression::ports::ExpressionStateRepository;

/// 获取当前表情查询
#[derive(Debug, Clone)]
pub struct GetExpressionQuery {
    pub session_id: SessionId,
}

impl GetExpressionQuery {
    pub fn new(session_id: SessionId) -> Self {
        Self { session_id }
    }
}

/// 获取当前表情响应
#[derive(Debug, Clone)]
pub struct GetExpressionResponse {
    pub state: Option<ExpressionState>,
}

/// 获取当前表情处理器
pub struct GetExpressionHandler {
    state_repository: Arc<dyn ExpressionStateRepository>,
}

impl GetExpressionHandler {
    pub fn new(state_repository: Arc<dyn ExpressionStateRepository>) -> Self {
        Self { state_repository }
    }
}

#[async_trait]
impl QueryHandler<GetExpressionQuery, GetExpressionResponse> for GetExpressionHandler {
    async fn handle(
        &self,
        query: GetExpressionQuery,
    ) -> Result<GetExpressionResponse, ApplicationError> {
        let state = self.state_repository.get(query.session_id).await?;
        Ok(GetExpressionResponse { state })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::expression::domain::Expression;
    use crate::modules::expression::infrastructure::InMemoryExpressionStateRepository;

    #[tokio::test]
    async fn test_get_existing_and_missing() {
        let repo = Arc::new(InMemoryExpressionStateRepository::new());
        let id = SessionId::new();
        repo.save(id, &ExpressionState::from(Expression::Caring))
            .await
            .unwrap();

        let handler = GetExpressionHandler::new(repo);

        let found = handler.handle(GetExpressionQuery::new(id)).await.unwrap();
        assert_eq!(found.state.map(|s| s.current()), Some(Expression::Caring));

        let missing = handler
            .handle(GetExpressionQuery::new(SessionId::new()))
            .await
            .unwrap();
        assert!(missing.state.is_none());
    }
}
