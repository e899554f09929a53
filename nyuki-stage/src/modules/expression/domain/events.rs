use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::services::MatchBasis;
use super::value_objects::{Expression, SessionId};

/// 领域事件基础 trait
pub trait DomainEvent: Clone + Send + Sync {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// 会话表情初始化事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionInitializedEvent {
    pub session_id: SessionId,
    pub expression: Expression,
    pub timestamp: DateTime<Utc>,
}

impl ExpressionInitializedEvent {
    pub fn new(session_id: SessionId, expression: Expression) -> Self {
        Self {
            session_id,
            expression,
            timestamp: Utc::now(),
        }
    }
}

impl DomainEvent for ExpressionInitializedEvent {
    fn event_type(&self) -> &'static str {
        "expression.initialized"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 表情变更事件（每条 bot 消息分类后发布，表情相同也会发布）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionChangedEvent {
    pub session_id: SessionId,
    pub previous: Expression,
    pub current: Expression,
    pub basis: MatchBasis,
    pub timestamp: DateTime<Utc>,
}

impl ExpressionChangedEvent {
    pub fn new(
        session_id: SessionId,
        previous: Expression,
        current: Expression,
        basis: MatchBasis,
    ) -> Self {
        Self {
            session_id,
            previous,
            current,
            basis,
            timestamp: Utc::now(),
        }
    }

    pub fn is_change(&self) -> bool {
        self.previous != self.current
    }
}

impl DomainEvent for ExpressionChangedEvent {
    fn event_type(&self) -> &'static str {
        "expression.changed"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 表情状态恢复事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionRestoredEvent {
    pub session_id: SessionId,
    pub expression: Expression,
    pub timestamp: DateTime<Utc>,
}

impl ExpressionRestoredEvent {
    pub fn new(session_id: SessionId, expression: Expression) -> Self {
        Self {
            session_id,
            expression,
            timestamp: Utc::now(),
        }
    }
}

impl DomainEvent for ExpressionRestoredEvent {
    fn event_type(&self) -> &'static str {
        "expression.restored"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 表情领域事件枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ExpressionDomainEvent {
    Initialized(ExpressionInitializedEvent),
    Changed(ExpressionChangedEvent),
    Restored(ExpressionRestoredEvent),
}

impl ExpressionDomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ExpressionDomainEvent::Initialized(e) => e.event_type(),
            ExpressionDomainEvent::Changed(e) => e.event_type(),
            ExpressionDomainEvent::Restored(e) => e.event_type(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        match self {
            ExpressionDomainEvent::Initialized(e) => e.session_id,
            ExpressionDomainEvent::Changed(e) => e.session_id,
            ExpressionDomainEvent::Restored(e) => e.session_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changed_event_serialization() {
        let event = ExpressionDomainEvent::Changed(ExpressionChangedEvent::new(
            SessionId::new(),
            Expression::Neutral,
            Expression::Joy,
            MatchBasis::Fallback,
        ));

        assert_eq!(event.event_type(), "expression.changed");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "changed");
        assert_eq!(json["previous"], "neutral");
        assert_eq!(json["current"], "joy");
    }

    #[test]
    fn test_is_change() {
        let id = SessionId::new();
        let same = ExpressionChangedEvent::new(
            id,
            Expression::Joy,
            Expression::Joy,
            MatchBasis::Fallback,
        );
        assert!(!same.is_change());
    }
}
