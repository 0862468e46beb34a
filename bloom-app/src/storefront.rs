use std::sync::Arc;
use bloom_catalog::{
    compose, BouquetKind, DecorationSpec, Inventory, InventoryError, Priceable, PricingStrategy,
};
use bloom_core::{BroadcastReport, CustomerSubscriber, EmailSubscriber, NotificationHub, PaymentReceipt, PaymentStrategy};
use bloom_shared::{Notification, OrderCompletedEvent};
use bloom_store::Config;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::error::StorefrontError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Base kind by name, e.g. "rose"
    pub kind: String,
    #[serde(default)]
    pub decorations: Vec<DecorationSpec>,
}

impl OrderRequest {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            decorations: Vec::new(),
        }
    }

    pub fn with_decoration(mut self, spec: DecorationSpec) -> Self {
        self.decorations.push(spec);
        self
    }
}

#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub kind: BouquetKind,
    pub description: String,
    /// Composed cost before the pricing strategy
    pub list_price: f64,
    pub total: f64,
    pub pricing: String,
    pub receipt: PaymentReceipt,
    pub broadcast: BroadcastReport,
}

/// Checkout orchestration: stock, composition, pricing, payment, notification.
pub struct Storefront {
    inventory: Inventory,
    pricing: Box<dyn PricingStrategy>,
    hub: NotificationHub,
}

impl Storefront {
    pub fn new(inventory: Inventory, pricing: Box<dyn PricingStrategy>, hub: NotificationHub) -> Self {
        Self { inventory, pricing, hub }
    }

    pub fn from_config(config: &Config) -> Self {
        let inventory = Inventory::stocked(&config.shop.stocked_kinds, config.shop.initial_stock);

        let mut hub = NotificationHub::new();
        for name in &config.notifications.customers {
            hub.subscribe(Arc::new(CustomerSubscriber::new(name.clone())));
        }
        for email in &config.notifications.emails {
            hub.subscribe(Arc::new(EmailSubscriber::new(email.clone())));
        }

        Self::new(inventory, config.pricing.build_strategy(), hub)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn pricing(&self) -> &dyn PricingStrategy {
        self.pricing.as_ref()
    }

    pub fn hub(&self) -> &NotificationHub {
        &self.hub
    }

    pub fn hub_mut(&mut self) -> &mut NotificationHub {
        &mut self.hub
    }

    /// Broadcast an arbitrary announcement to every subscriber
    pub fn announce(&self, message: impl Into<String>) -> BroadcastReport {
        self.hub.broadcast(&Notification::message(message))
    }

    pub fn checkout(
        &mut self,
        request: OrderRequest,
        payment: &dyn PaymentStrategy,
    ) -> Result<OrderSummary, StorefrontError> {
        let kind: BouquetKind = request.kind.parse()?;
        self.inventory.reserve(kind, 1)?;

        let item = compose(bloom_catalog::create_base(kind), &request.decorations);
        let list_price = item.cost();
        let total = self.pricing.apply(list_price);
        let description = item.description();

        let receipt = match payment.pay(total) {
            Ok(receipt) => receipt,
            Err(err) => {
                self.inventory.release(kind, 1).map_err(|e| bookkeeping_error(kind, e))?;
                tracing::warn!(%kind, error = %err, "payment failed, reservation released");
                return Err(err.into());
            }
        };
        self.inventory.commit(kind, 1).map_err(|e| bookkeeping_error(kind, e))?;

        let event = OrderCompletedEvent {
            order_id: Uuid::new_v4(),
            description: description.clone(),
            total,
            payment_reference: receipt.reference.clone(),
            completed_at: Utc::now(),
        };
        tracing::info!(
            order_id = %event.order_id,
            %description,
            total,
            pricing = self.pricing.name(),
            "order completed"
        );
        let broadcast = self.hub.broadcast(&Notification::from(&event));

        Ok(OrderSummary {
            order_id: event.order_id,
            kind,
            description,
            list_price,
            total,
            pricing: self.pricing.name().to_string(),
            receipt,
            broadcast,
        })
    }
}

/// A reserved unit went missing between reserve and commit/release
fn bookkeeping_error(kind: BouquetKind, err: InventoryError) -> InventoryError {
    tracing::error!(%kind, error = %err, "inventory bookkeeping error");
    err
}
