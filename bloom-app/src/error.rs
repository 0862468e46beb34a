use bloom_catalog::{CatalogError, InventoryError};
use bloom_core::PaymentError;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Payment declined: {0}")]
    Payment(#[from] PaymentError),
}

impl StorefrontError {
    /// Whether the customer can fix the request and try again
    pub fn is_client_error(&self) -> bool {
        match self {
            StorefrontError::Catalog(_) | StorefrontError::Payment(_) => true,
            StorefrontError::Inventory(
                InventoryError::NotFound(_) | InventoryError::InsufficientInventory { .. },
            ) => true,
            StorefrontError::Inventory(InventoryError::InsufficientReserved { .. }) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_catalog::BouquetKind;

    #[test]
    fn test_client_errors() {
        assert!(StorefrontError::from(PaymentError::InvalidCard).is_client_error());
        assert!(StorefrontError::from(InventoryError::NotFound(BouquetKind::Rose)).is_client_error());

        let bookkeeping = InventoryError::InsufficientReserved {
            kind: BouquetKind::Rose,
            requested: 1,
            reserved: 0,
        };
        assert!(!StorefrontError::from(bookkeeping).is_client_error());
    }
}
