pub mod product;
pub mod decoration;
pub mod adapter;
pub mod pricing;
pub mod inventory;

pub use product::{create_base, create_base_named, cost, describe, Bouquet, BouquetKind, CatalogError, Priceable};
pub use decoration::{compose, decorate, Decorated, DecorationSpec};
pub use adapter::{FlowerAdapter, RawFlower};
pub use pricing::{DiscountPricing, PricingConfig, PricingStrategy, PricingStrategyKind, StandardPricing};
pub use inventory::{Inventory, InventoryError};
