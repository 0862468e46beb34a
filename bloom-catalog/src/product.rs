use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::decoration::DecorationSpec;

/// Base product kinds offered by the shop
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum BouquetKind {
    Rose,
    Lily,
    Tulip,
    Basic,
    Premium,
}

impl BouquetKind {
    /// Every kind, in catalogue order
    pub const ALL: [BouquetKind; 5] = [
        BouquetKind::Rose,
        BouquetKind::Lily,
        BouquetKind::Tulip,
        BouquetKind::Basic,
        BouquetKind::Premium,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            BouquetKind::Rose => "Rose bouquet",
            BouquetKind::Lily => "Lily bouquet",
            BouquetKind::Tulip => "Tulip bouquet",
            BouquetKind::Basic => "Basic Flower Arrangement",
            BouquetKind::Premium => "Premium Flower Arrangement",
        }
    }

    pub fn base_cost(&self) -> f64 {
        match self {
            BouquetKind::Rose => 15.0,
            BouquetKind::Lily => 12.0,
            BouquetKind::Tulip => 10.0,
            BouquetKind::Basic => 15.0,
            BouquetKind::Premium => 25.0,
        }
    }

    /// Short display name used in stock listings
    pub fn display_name(&self) -> &'static str {
        match self {
            BouquetKind::Rose => "Rose",
            BouquetKind::Lily => "Lily",
            BouquetKind::Tulip => "Tulip",
            BouquetKind::Basic => "Basic",
            BouquetKind::Premium => "Premium",
        }
    }
}

impl fmt::Display for BouquetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BouquetKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BouquetKind::ALL
            .into_iter()
            .find(|kind| kind.display_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::InvalidArgument(s.to_string()))
    }
}

/// Anything with a description and a cost.
///
/// Implementations are immutable: both methods are pure and may be called any
/// number of times.
pub trait Priceable: Send + Sync {
    fn description(&self) -> String;

    fn cost(&self) -> f64;

    /// Move the base item and its decoration layers out of a decorated item
    /// so a new decoration extends the same layer list. Plain items return `None`.
    fn take_decorations(&mut self) -> Option<(Box<dyn Priceable>, Vec<DecorationSpec>)> {
        None
    }
}

impl<P: Priceable + ?Sized> Priceable for Box<P> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn take_decorations(&mut self) -> Option<(Box<dyn Priceable>, Vec<DecorationSpec>)> {
        (**self).take_decorations()
    }
}

/// A base product straight from the factory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bouquet {
    kind: BouquetKind,
    description: String,
    base_cost: f64,
}

impl Bouquet {
    pub fn kind(&self) -> BouquetKind {
        self.kind
    }

    pub fn base_cost(&self) -> f64 {
        self.base_cost
    }
}

impl Priceable for Bouquet {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn cost(&self) -> f64 {
        self.base_cost
    }
}

/// Catalog errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid flower type: {0}")]
    InvalidArgument(String),
}

/// Build the predefined base item for a known kind.
pub fn create_base(kind: BouquetKind) -> Bouquet {
    tracing::debug!(%kind, "creating base bouquet");
    Bouquet {
        kind,
        description: kind.description().to_string(),
        base_cost: kind.base_cost(),
    }
}

/// Build a base item from its name. Unknown names are always an error,
/// never an empty result.
pub fn create_base_named(kind: &str) -> Result<Bouquet, CatalogError> {
    let kind: BouquetKind = kind.parse()?;
    Ok(create_base(kind))
}

/// Total cost of any priceable item, including all decorations
pub fn cost(item: &dyn Priceable) -> f64 {
    item.cost()
}

/// Full description of any priceable item, innermost first
pub fn describe(item: &dyn Priceable) -> String {
    item.description()
}
