use serde::{Deserialize, Serialize};

/// A pricing rule mapping a base price to a final price
pub trait PricingStrategy: Send + Sync {
    /// Short name used in logs and receipts
    fn name(&self) -> &str;

    fn apply(&self, base_price: f64) -> f64;
}

/// Leaves the price unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPricing;

impl PricingStrategy for StandardPricing {
    fn name(&self) -> &str {
        "standard"
    }

    fn apply(&self, base_price: f64) -> f64 {
        base_price
    }
}

/// Fixed-percentage discount
#[derive(Debug, Clone, Copy)]
pub struct DiscountPricing {
    /// Share of the base price the customer pays (0.8 = 20% off)
    retention_factor: f64,
}

impl DiscountPricing {
    pub fn new(retention_factor: f64) -> Self {
        Self { retention_factor }
    }

    /// `percent_off(20.0)` keeps 80% of the price
    pub fn percent_off(percent: f64) -> Self {
        Self::new(1.0 - percent / 100.0)
    }

    pub fn retention_factor(&self) -> f64 {
        self.retention_factor
    }
}

impl Default for DiscountPricing {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOUNT_RETENTION)
    }
}

impl PricingStrategy for DiscountPricing {
    fn name(&self) -> &str {
        "discount"
    }

    fn apply(&self, base_price: f64) -> f64 {
        base_price * self.retention_factor
    }
}

pub const DEFAULT_DISCOUNT_RETENTION: f64 = 0.8;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingStrategyKind {
    Standard,
    #[default]
    Discount,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Which rule checkout applies
    #[serde(default)]
    pub strategy: PricingStrategyKind,

    /// Retention factor for the discount rule
    #[serde(default = "default_retention")]
    pub discount_retention: f64,
}

fn default_retention() -> f64 { DEFAULT_DISCOUNT_RETENTION }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            strategy: PricingStrategyKind::default(),
            discount_retention: DEFAULT_DISCOUNT_RETENTION,
        }
    }
}

impl PricingConfig {
    pub fn build_strategy(&self) -> Box<dyn PricingStrategy> {
        match self.strategy {
            PricingStrategyKind::Standard => Box::new(StandardPricing),
            PricingStrategyKind::Discount => Box::new(DiscountPricing::new(self.discount_retention)),
        }
    }
}
