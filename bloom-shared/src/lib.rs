pub mod models;
pub mod pii;

pub use models::events::{Notification, OrderCompletedEvent};
pub use pii::Masked;
