use std::sync::Arc;
use bloom_shared::{Masked, Notification};

/// A party interested in shop events
pub trait Subscriber: Send + Sync {
    /// Opaque contact (email address or customer name)
    fn id(&self) -> &str;

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Invalid contact address: {0}")]
    InvalidAddress(String),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub subscriber_id: String,
    pub error: NotifyError,
}

/// Outcome of one broadcast
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl BroadcastReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

/// Ordered publish/subscribe broadcaster. Delivery order is subscription
/// order; the same subscriber may be registered more than once.
#[derive(Default)]
pub struct NotificationHub {
    subscribers: Vec<Arc<dyn Subscriber>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Arc<dyn Subscriber>) {
        tracing::debug!(subscriber = %Masked(subscriber.id()), "subscriber added");
        self.subscribers.push(subscriber);
    }

    /// Remove the first subscriber registered under `id`.
    /// Returns `false` when nothing matched.
    pub fn unsubscribe(&mut self, id: &str) -> bool {
        match self.subscribers.iter().position(|s| s.id() == id) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn subscriber_ids(&self) -> Vec<&str> {
        self.subscribers.iter().map(|s| s.id()).collect()
    }

    /// Deliver to every subscriber. A failing subscriber is recorded in the
    /// report and delivery moves on to the next one.
    pub fn broadcast(&self, notification: &Notification) -> BroadcastReport {
        let mut report = BroadcastReport::default();

        for subscriber in &self.subscribers {
            match subscriber.notify(notification) {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    tracing::warn!(
                        subscriber = %Masked(subscriber.id()),
                        %error,
                        "notification delivery failed"
                    );
                    report.failures.push(DeliveryFailure {
                        subscriber_id: subscriber.id().to_string(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            notification_id = %notification.id,
            delivered = report.delivered,
            failed = report.failures.len(),
            "broadcast finished"
        );
        report
    }
}

/// Sends order details to an email address
#[derive(Debug, Clone)]
pub struct EmailSubscriber {
    email: String,
}

impl EmailSubscriber {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    /// The line written for one delivery
    pub fn render(&self, notification: &Notification) -> String {
        match notification.amount {
            Some(amount) => format!(
                "Sent email to {} with order details: {} (total ${:.2})",
                self.email, notification.message, amount
            ),
            None => format!("Sent email to {} with order details: {}", self.email, notification.message),
        }
    }
}

impl Subscriber for EmailSubscriber {
    fn id(&self) -> &str {
        &self.email
    }

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let valid = self
            .email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(NotifyError::InvalidAddress(self.email.clone()));
        }

        println!("{}", self.render(notification));
        tracing::info!(to = %Masked(self.email.as_str()), "email sent");
        Ok(())
    }
}

/// A named customer following the shop
#[derive(Debug, Clone)]
pub struct CustomerSubscriber {
    name: String,
}

impl CustomerSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Subscriber for CustomerSubscriber {
    fn id(&self) -> &str {
        &self.name
    }

    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        println!("{} received a notification: {}", self.name, notification.message);
        Ok(())
    }
}
