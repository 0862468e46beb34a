use serde::{Deserialize, Serialize};
use crate::product::Priceable;

/// Fixed price for a single adapted flower
pub const ADAPTED_FLOWER_COST: f64 = 10.0;

/// A flower as delivered by an external supplier: a name and nothing else
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawFlower {
    name: String,
}

impl RawFlower {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Presents a [`RawFlower`] as a [`Priceable`] item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlowerAdapter {
    name: String,
    unit_cost: f64,
}

impl FlowerAdapter {
    pub fn adapt(flower: &RawFlower) -> Self {
        Self {
            name: flower.name().to_string(),
            unit_cost: ADAPTED_FLOWER_COST,
        }
    }

    pub fn with_unit_cost(mut self, unit_cost: f64) -> Self {
        self.unit_cost = unit_cost;
        self
    }
}

impl Priceable for FlowerAdapter {
    fn description(&self) -> String {
        self.name.clone()
    }

    fn cost(&self) -> f64 {
        self.unit_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::{decorate, DecorationSpec};

    #[test]
    fn test_adapted_flower() {
        let rose = RawFlower::new("Rose");
        let adapted = FlowerAdapter::adapt(&rose);

        assert_eq!(adapted.description(), "Rose");
        assert_eq!(adapted.cost(), ADAPTED_FLOWER_COST);
    }

    #[test]
    fn test_adapting_twice_gives_independent_items() {
        let rose = RawFlower::new("Rose");
        let first = FlowerAdapter::adapt(&rose);
        let second = FlowerAdapter::adapt(&rose).with_unit_cost(11.0);

        assert_eq!(first.description(), second.description());
        assert_eq!(first.cost(), 10.0);
        assert_eq!(second.cost(), 11.0);
        assert_eq!(FlowerAdapter::adapt(&rose), first);
    }

    #[test]
    fn test_adapted_flower_can_be_decorated() {
        let adapted = FlowerAdapter::adapt(&RawFlower::new("Sunflower"));
        let wrapped = decorate(adapted, DecorationSpec::ribbon());

        assert_eq!(wrapped.description(), "Sunflower with ribbon");
        assert_eq!(wrapped.cost(), 12.0);
    }
}
