use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Payload delivered to every subscriber of the notification hub.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub amount: Option<f64>,
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            amount: None,
            sent_at: Utc::now(),
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
pub struct OrderCompletedEvent {
    pub order_id: Uuid,
    pub description: String,
    pub total: f64,
    pub payment_reference: String,
    pub completed_at: DateTime<Utc>,
}

impl From<&OrderCompletedEvent> for Notification {
    fn from(event: &OrderCompletedEvent) -> Self {
        Notification {
            id: Uuid::new_v4(),
            message: format!("Order {} completed: {}", event.order_id.simple(), event.description),
            amount: Some(event.total),
            sent_at: event.completed_at,
        }
    }
}
