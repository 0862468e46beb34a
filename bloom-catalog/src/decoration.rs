use serde::{Deserialize, Serialize};
use crate::product::Priceable;

pub const RIBBON_LABEL: &str = "with ribbon";
pub const RIBBON_SURCHARGE: f64 = 2.0;

/// An additive extra applied on top of an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecorationSpec {
    pub label: String,
    pub surcharge: f64,
}

impl DecorationSpec {
    pub fn new(label: impl Into<String>, surcharge: f64) -> Self {
        Self {
            label: label.into(),
            surcharge,
        }
    }

    pub fn ribbon() -> Self {
        Self::new(RIBBON_LABEL, RIBBON_SURCHARGE)
    }

    pub fn ribbon_with_surcharge(surcharge: f64) -> Self {
        Self::new(RIBBON_LABEL, surcharge)
    }
}

/// A base item with one or more decorations layered on top, innermost first.
///
/// Decorating a `Decorated` extends its layer list rather than nesting it, so
/// cost and description are computed in a single pass however many layers
/// an item carries.
pub struct Decorated {
    base: Box<dyn Priceable>,
    layers: Vec<DecorationSpec>,
}

impl Decorated {
    /// The undecorated item at the bottom of the chain
    pub fn base(&self) -> &dyn Priceable {
        self.base.as_ref()
    }

    /// Applied decorations, innermost first
    pub fn decorations(&self) -> &[DecorationSpec] {
        &self.layers
    }

    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Add one more decoration on the outside
    pub fn then(mut self, spec: DecorationSpec) -> Self {
        self.layers.push(spec);
        self
    }

    pub fn into_parts(self) -> (Box<dyn Priceable>, Vec<DecorationSpec>) {
        (self.base, self.layers)
    }

    fn wrap(mut item: Box<dyn Priceable>) -> Self {
        let parts = item.take_decorations();
        match parts {
            Some((base, layers)) => Self { base, layers },
            None => Self {
                base: item,
                layers: Vec::new(),
            },
        }
    }
}

impl Priceable for Decorated {
    fn description(&self) -> String {
        let mut description = self.base.description();
        for spec in &self.layers {
            description.push(' ');
            description.push_str(&spec.label);
        }
        description
    }

    fn cost(&self) -> f64 {
        self.layers
            .iter()
            .fold(self.base.cost(), |total, spec| total + spec.surcharge)
    }

    fn take_decorations(&mut self) -> Option<(Box<dyn Priceable>, Vec<DecorationSpec>)> {
        let base = std::mem::replace(&mut self.base, Box::new(Detached));
        Some((base, std::mem::take(&mut self.layers)))
    }
}

impl std::fmt::Debug for Decorated {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decorated")
            .field("description", &self.description())
            .field("cost", &self.cost())
            .finish()
    }
}

/// Left behind in a `Decorated` whose layers were moved out
struct Detached;

impl Priceable for Detached {
    fn description(&self) -> String {
        String::new()
    }

    fn cost(&self) -> f64 {
        0.0
    }
}

/// Wrap an item with a single decoration
pub fn decorate<P>(item: P, spec: DecorationSpec) -> Decorated
where
    P: Priceable + 'static,
{
    tracing::debug!(label = %spec.label, surcharge = spec.surcharge, "decorating item");
    Decorated::wrap(Box::new(item)).then(spec)
}

/// Apply decorations in order; the first spec sits closest to the base item.
pub fn compose<P>(base: P, specs: &[DecorationSpec]) -> Box<dyn Priceable>
where
    P: Priceable + 'static,
{
    if specs.is_empty() {
        return Box::new(base);
    }

    let mut item = Decorated::wrap(Box::new(base));
    item.layers.extend_from_slice(specs);
    tracing::debug!(depth = item.depth(), "composed item");
    Box::new(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{create_base, BouquetKind};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rose_with_ribbon() {
        let rose = create_base(BouquetKind::Rose);
        let decorated = decorate(rose, DecorationSpec::ribbon());

        assert_eq!(decorated.cost(), 17.0);
        assert_eq!(decorated.description(), "Rose bouquet with ribbon");
        assert_eq!(decorated.decorations(), &[DecorationSpec::ribbon()][..]);
        assert_eq!(decorated.base().cost(), 15.0);
    }

    #[test]
    fn test_zero_decorations_is_base() {
        let tulip = create_base(BouquetKind::Tulip);
        let item = compose(tulip.clone(), &[]);

        assert_eq!(item.cost(), tulip.cost());
        assert_eq!(item.description(), tulip.description());
    }

    #[test]
    fn test_original_item_is_untouched() {
        let lily = create_base(BouquetKind::Lily);
        let _decorated = decorate(lily.clone(), DecorationSpec::new("with vase", 8.0));

        assert_eq!(lily.cost(), 12.0);
        assert_eq!(lily.description(), "Lily bouquet");
    }

    #[test]
    fn test_order_is_preserved() {
        let item = compose(
            create_base(BouquetKind::Rose),
            &[DecorationSpec::new("d1", 1.0), DecorationSpec::new("d2", 2.0)],
        );
        assert_eq!(item.description(), "Rose bouquet d1 d2");
    }

    #[test]
    fn test_same_decoration_stacks() {
        let item = compose(
            create_base(BouquetKind::Basic),
            &[DecorationSpec::ribbon(), DecorationSpec::ribbon(), DecorationSpec::ribbon()],
        );
        assert_eq!(item.cost(), 21.0);
        assert_eq!(
            item.description(),
            "Basic Flower Arrangement with ribbon with ribbon with ribbon"
        );
    }

    #[test]
    fn test_decorating_decorated_item() {
        let once = decorate(create_base(BouquetKind::Premium), DecorationSpec::ribbon_with_surcharge(5.0));
        let twice = decorate(once, DecorationSpec::new("with card", 1.5));

        assert!(approx_eq(twice.cost(), 31.5));
        assert_eq!(twice.depth(), 2);
        let (base, layers) = twice.into_parts();
        assert_eq!(layers[1].label, "with card");
        assert_eq!(base.cost(), 25.0);
        assert_eq!(base.description(), "Premium Flower Arrangement");
    }

    #[test]
    fn test_decorating_boxed_composite_extends_layers() {
        let composed = compose(create_base(BouquetKind::Rose), &[DecorationSpec::ribbon()]);
        let item = decorate(composed, DecorationSpec::new("with card", 1.0));

        assert_eq!(item.depth(), 2);
        assert_eq!(item.base().description(), "Rose bouquet");
        assert_eq!(item.description(), "Rose bouquet with ribbon with card");
        assert_eq!(item.cost(), 18.0);
    }

    #[test]
    fn test_very_deep_chain() {
        let depth = 200_000;
        let specs = vec![DecorationSpec::new("x", 1.0); depth];

        let item = compose(create_base(BouquetKind::Tulip), &specs);
        assert_eq!(item.cost(), 10.0 + depth as f64);
        assert_eq!(item.description().len(), "Tulip bouquet".len() + 2 * depth);
        drop(item);

        let mut item = decorate(create_base(BouquetKind::Tulip), DecorationSpec::new("x", 1.0));
        for _ in 1..depth {
            item = decorate(item, DecorationSpec::new("x", 1.0));
        }
        assert_eq!(item.depth(), depth);
        assert_eq!(item.cost(), 10.0 + depth as f64);
    }

    #[test]
    fn test_long_chain_sums_surcharges() {
        let specs: Vec<DecorationSpec> = (1..=50)
            .map(|i| DecorationSpec::new(format!("d{}", i), i as f64 * 0.25))
            .collect();
        let expected: f64 = 10.0 + specs.iter().map(|s| s.surcharge).sum::<f64>();

        let item = compose(create_base(BouquetKind::Tulip), &specs);
        assert!(approx_eq(item.cost(), expected));
        assert!(item.description().starts_with("Tulip bouquet d1 d2 d3"));
        assert!(item.description().ends_with("d49 d50"));
    }
}
