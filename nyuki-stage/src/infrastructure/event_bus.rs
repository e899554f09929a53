use tokio::sync::broadcast;

use crate::modules::expression::domain::ExpressionDomainEvent;

const EVENT_CHANNEL_CAPACITY: usize = 100;

#[derive(Clone, Debug)]
pub enum AppEvent {
    Expression(ExpressionDomainEvent),
}

impl AppEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AppEvent::Expression(event) => event.event_type(),
        }
    }
}

impl From<ExpressionDomainEvent> for AppEvent {
    fn from(event: ExpressionDomainEvent) -> Self {
        AppEvent::Expression(event)
    }
}

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn publish(&self, event: impl Into<AppEvent>) {
        let event = event.into();
        tracing::debug!("[EventBus] Publishing event: {}", event.event_type());

        // 没有订阅者时发送失败，属于正常情况
        if self.sender.send(event).is_err() {
            tracing::trace!("[EventBus] No subscribers");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::expression::domain::{
        Expression, ExpressionInitializedEvent, SessionId,
    };

    #[tokio::test]
    async fn test_publish_to_subscriber() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();
        let id = SessionId::new();

        bus.publish(ExpressionDomainEvent::Initialized(
            ExpressionInitializedEvent::new(id, Expression::Neutral),
        ));

        let AppEvent::Expression(event) = receiver.recv().await.unwrap();
        assert_eq!(event.event_type(), "expression.initialized");
        assert_eq!(event.session_id(), id);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = EventBus::new();
        bus.publish(ExpressionDomainEvent::Initialized(
            ExpressionInitializedEvent::new(SessionId::new(), Expression::Joy),
        ));
    }
}
