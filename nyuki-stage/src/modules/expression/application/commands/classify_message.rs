use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, CommandHandler};
use crate::modules::expression::domain::{
    Classification, ExpressionChangedEvent, ExpressionClassifier, ExpressionState, SessionId,
};
use crate::modules::expression::ports::ExpressionStateRepository;

/// 分类消息命令
///
/// 每条 bot 消息调用一次
#[derive(Debug, Clone)]
pub struct ClassifyMessageCommand {
    pub session_id: SessionId,
    pub content: String,
}

impl ClassifyMessageCommand {
    pub fn new(session_id: SessionId, content: impl Into<String>) -> Self {
        Self {
            session_id,
            content: content.into(),
        }
    }
}

/// 分类消息响应
#[derive(Debug, Clone)]
pub struct ClassifyMessageResponse {
    pub state: ExpressionState,
    pub classification: Classification,
    pub event: ExpressionChangedEvent,
}

/// 分类消息处理器
pub struct ClassifyMessageHandler {
    state_repository: Arc<dyn ExpressionStateRepository>,
    classifier: ExpressionClassifier,
}

impl ClassifyMessageHandler {
    pub fn new(state_repository: Arc<dyn ExpressionStateRepository>) -> Self {
        Self {
            state_repository,
            classifier: ExpressionClassifier::new(),
        }
    }
}

#[async_trait]
impl CommandHandler<ClassifyMessageCommand, ClassifyMessageResponse> for ClassifyMessageHandler {
    async fn handle(
        &self,
        command: ClassifyMessageCommand,
    ) -> Result<ClassifyMessageResponse, ApplicationError> {
        let mut state = self
            .state_repository
            .get(command.session_id)
            .await?
            .ok_or_else(|| ApplicationError::SessionNotFound(command.session_id.to_string()))?;

        let previous = state.current();
        let classification = self.classifier.classify_detailed(&command.content);
        state.record_classification(classification.expression);

        self.state_repository
            .save(command.session_id, &state)
            .await?;

        let event = ExpressionChangedEvent::new(
            command.session_id,
            previous,
            state.current(),
            classification.basis.clone(),
        );

        if event.is_change() {
            tracing::info!(
                session_id = %command.session_id,
                from = %previous,
                to = %state.current(),
                "Expression changed"
            );
        }

        Ok(ClassifyMessageResponse {
            state,
            classification,
            event,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::expression::domain::{Expression, MatchBasis};
    use crate::modules::expression::infrastructure::InMemoryExpressionStateRepository;

    async fn setup() -> (Arc<InMemoryExpressionStateRepository>, SessionId) {
        let repo = Arc::new(InMemoryExpressionStateRepository::new());
        let id = SessionId::new();
        repo.save(id, &ExpressionState::default()).await.unwrap();
        (repo, id)
    }

    #[tokio::test]
    async fn test_classify_records_and_persists() {
        let (repo, id) = setup().await;
        let handler = ClassifyMessageHandler::new(repo.clone());

        let response = handler
            .handle(ClassifyMessageCommand::new(id, "*giggles* you're silly"))
            .await
            .unwrap();

        assert_eq!(response.state.current(), Expression::Joy);
        assert_eq!(response.event.previous, Expression::Neutral);
        assert!(response.event.is_change());
        assert_eq!(
            repo.get(id).await.unwrap().map(|s| s.current()),
            Some(Expression::Joy)
        );
    }

    #[tokio::test]
    async fn test_consecutive_messages_overwrite() {
        let (repo, id) = setup().await;
        let handler = ClassifyMessageHandler::new(repo.clone());

        handler
            .handle(ClassifyMessageCommand::new(id, "[anger]"))
            .await
            .unwrap();
        let response = handler
            .handle(ClassifyMessageCommand::new(id, "Just an ordinary reply."))
            .await
            .unwrap();

        // 未命中时回到 Neutral，不保留上一次的表情
        assert_eq!(response.state.current(), Expression::Neutral);
        assert_eq!(response.classification.basis, MatchBasis::Fallback);
        assert_eq!(response.event.previous, Expression::Anger);
    }

    #[tokio::test]
    async fn test_classify_unknown_session() {
        let handler =
            ClassifyMessageHandler::new(Arc::new(InMemoryExpressionStateRepository::new()));

        let result = handler
            .handle(ClassifyMessageCommand::new(SessionId::new(), "*laughs*"))
            .await;

        assert!(matches!(result, Err(ApplicationError::SessionNotFound(_))));
    }
}
