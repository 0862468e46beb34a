pub mod demo;
pub mod error;
pub mod storefront;

pub use error::StorefrontError;
pub use storefront::{OrderRequest, OrderSummary, Storefront};
