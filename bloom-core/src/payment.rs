use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;
use bloom_shared::Masked;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

/// Issued only for a successful charge; a declined payment is a `PaymentError`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub reference: String,
    pub method: PaymentMethod,
    pub amount: f64,
    /// Human readable confirmation line
    pub message: String,
    pub paid_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum PaymentError {
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(f64),

    #[error("Invalid card number")]
    InvalidCard,
}

/// A way of paying for an order
pub trait PaymentStrategy: Send + Sync {
    fn method(&self) -> PaymentMethod;

    fn pay(&self, amount: f64) -> Result<PaymentReceipt, PaymentError>;
}

fn check_amount(amount: f64) -> Result<(), PaymentError> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(PaymentError::InvalidAmount(amount))
    }
}

fn receipt(method: PaymentMethod, amount: f64, message: String) -> PaymentReceipt {
    PaymentReceipt {
        reference: format!("pay_{}", Uuid::new_v4().simple()),
        method,
        amount,
        message,
        paid_at: Utc::now(),
    }
}

#[derive(Debug, Clone)]
pub struct CreditCardPayment {
    card_number: String,
    holder: String,
}

impl CreditCardPayment {
    pub fn new(card_number: impl Into<String>, holder: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
            holder: holder.into(),
        }
    }

    fn last_four(&self) -> Result<&str, PaymentError> {
        let number = self.card_number.as_str();
        if number.len() < 4 || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PaymentError::InvalidCard);
        }
        Ok(&number[number.len() - 4..])
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn pay(&self, amount: f64) -> Result<PaymentReceipt, PaymentError> {
        check_amount(amount)?;
        let last_four = self.last_four()?;

        tracing::info!(holder = %Masked(self.holder.as_str()), amount, "credit card charged");
        Ok(receipt(
            PaymentMethod::CreditCard,
            amount,
            format!("Paid {:.2} using credit card ending in {}", amount, last_four),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn pay(&self, amount: f64) -> Result<PaymentReceipt, PaymentError> {
        check_amount(amount)?;

        tracing::info!(account = %Masked(self.email.as_str()), amount, "paypal charged");
        Ok(receipt(
            PaymentMethod::PayPal,
            amount,
            format!("Paid {:.2} using PayPal account {}", amount, self.email),
        ))
    }
}
