pub mod notification;
pub mod payment;

pub use notification::{
    BroadcastReport, CustomerSubscriber, DeliveryFailure, EmailSubscriber, NotificationHub, NotifyError, Subscriber,
};
pub use payment::{CreditCardPayment, PayPalPayment, PaymentError, PaymentMethod, PaymentReceipt, PaymentStrategy};
