use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::product::BouquetKind;

/// Stock tracking for one bouquet kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockLevel {
    pub kind: BouquetKind,
    pub available_quantity: u32,
    pub total_capacity: u32,
    pub reserved_quantity: u32,
}

/// In-memory shop inventory.
///
/// Constructed explicitly and handed to whoever needs it; there is no
/// process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    stock: BTreeMap<BouquetKind, StockLevel>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory with the same capacity for every kind in `kinds`
    pub fn stocked(kinds: &[BouquetKind], capacity: u32) -> Self {
        let mut inventory = Self::new();
        for kind in kinds {
            inventory.initialize(*kind, capacity);
        }
        inventory
    }

    /// Initialize (or reset) stock for a kind
    pub fn initialize(&mut self, kind: BouquetKind, total_capacity: u32) {
        self.stock.insert(kind, StockLevel {
            kind,
            available_quantity: total_capacity,
            total_capacity,
            reserved_quantity: 0,
        });
    }

    pub fn get(&self, kind: BouquetKind) -> Option<&StockLevel> {
        self.stock.get(&kind)
    }

    /// Hold stock for an order in progress
    pub fn reserve(&mut self, kind: BouquetKind, quantity: u32) -> Result<(), InventoryError> {
        let item = self.stock.get_mut(&kind)
            .ok_or(InventoryError::NotFound(kind))?;

        if item.available_quantity < quantity {
            return Err(InventoryError::InsufficientInventory {
                kind,
                requested: quantity,
                available: item.available_quantity,
            });
        }

        item.available_quantity -= quantity;
        item.reserved_quantity += quantity;
        tracing::debug!(%kind, quantity, available = item.available_quantity, "stock reserved");

        Ok(())
    }

    /// Return held stock (order abandoned)
    pub fn release(&mut self, kind: BouquetKind, quantity: u32) -> Result<(), InventoryError> {
        let item = self.stock.get_mut(&kind)
            .ok_or(InventoryError::NotFound(kind))?;

        let released = quantity.min(item.reserved_quantity);
        item.available_quantity += released;
        item.reserved_quantity -= released;

        Ok(())
    }

    /// Consume held stock (order paid)
    pub fn commit(&mut self, kind: BouquetKind, quantity: u32) -> Result<(), InventoryError> {
        let item = self.stock.get_mut(&kind)
            .ok_or(InventoryError::NotFound(kind))?;

        if item.reserved_quantity < quantity {
            return Err(InventoryError::InsufficientReserved {
                kind,
                requested: quantity,
                reserved: item.reserved_quantity,
            });
        }

        item.reserved_quantity -= quantity;

        Ok(())
    }

    /// Kinds with stock left, in catalogue order
    pub fn available_kinds(&self) -> Vec<BouquetKind> {
        self.stock
            .values()
            .filter(|level| level.available_quantity > 0)
            .map(|level| level.kind)
            .collect()
    }

    pub fn display_line(&self) -> String {
        let names: Vec<&str> = self
            .available_kinds()
            .into_iter()
            .map(|kind| kind.display_name())
            .collect();
        format!("Available Flowers: {}", names.join(", "))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InventoryError {
    #[error("Inventory not found: {0}")]
    NotFound(BouquetKind),

    #[error("Insufficient {kind} stock: requested {requested}, available {available}")]
    InsufficientInventory {
        kind: BouquetKind,
        requested: u32,
        available: u32,
    },

    #[error("Insufficient reserved {kind} stock: requested {requested}, reserved {reserved}")]
    InsufficientReserved {
        kind: BouquetKind,
        requested: u32,
        reserved: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_lifecycle() {
        let mut inventory = Inventory::new();
        inventory.initialize(BouquetKind::Rose, 10);

        inventory.reserve(BouquetKind::Rose, 3).unwrap();
        let level = inventory.get(BouquetKind::Rose).unwrap();
        assert_eq!(level.available_quantity, 7);
        assert_eq!(level.reserved_quantity, 3);

        inventory.commit(BouquetKind::Rose, 2).unwrap();
        inventory.release(BouquetKind::Rose, 1).unwrap();
        let level = inventory.get(BouquetKind::Rose).unwrap();
        assert_eq!(level.available_quantity, 8);
        assert_eq!(level.reserved_quantity, 0);
        assert_eq!(level.total_capacity, 10);
    }

    #[test]
    fn test_reserve_errors() {
        let mut inventory = Inventory::stocked(&[BouquetKind::Tulip], 1);

        assert_eq!(
            inventory.reserve(BouquetKind::Lily, 1),
            Err(InventoryError::NotFound(BouquetKind::Lily))
        );
        assert_eq!(
            inventory.reserve(BouquetKind::Tulip, 2),
            Err(InventoryError::InsufficientInventory {
                kind: BouquetKind::Tulip,
                requested: 2,
                available: 1,
            })
        );
        assert!(matches!(
            inventory.commit(BouquetKind::Tulip, 1),
            Err(InventoryError::InsufficientReserved { .. })
        ));
    }

    #[test]
    fn test_display_line_lists_stocked_kinds() {
        let mut inventory = Inventory::stocked(
            &[BouquetKind::Tulip, BouquetKind::Rose, BouquetKind::Lily],
            1,
        );
        assert_eq!(inventory.display_line(), "Available Flowers: Rose, Lily, Tulip");

        inventory.reserve(BouquetKind::Lily, 1).unwrap();
        assert_eq!(inventory.available_kinds(), vec![BouquetKind::Rose, BouquetKind::Tulip]);
    }
}
