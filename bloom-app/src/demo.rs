use bloom_catalog::{
    compose, create_base_named, decorate, DecorationSpec, DiscountPricing, FlowerAdapter, Priceable,
    PricingStrategy, RawFlower, StandardPricing,
};
use bloom_core::CreditCardPayment;
use bloom_store::Config;
use crate::error::StorefrontError;
use crate::storefront::{OrderRequest, Storefront};

/// Base price used to compare the pricing strategies
pub const SAMPLE_BASE_PRICE: f64 = 30.0;

/// Walk through every storefront feature once. Returns the lines to print;
/// subscribers write their own deliveries as they happen.
pub fn run(config: &Config) -> Result<Vec<String>, StorefrontError> {
    let mut lines = Vec::new();
    let mut shop = Storefront::from_config(config);
    let ribbon = DecorationSpec::ribbon_with_surcharge(config.decorations.ribbon_surcharge);

    lines.push(format!("Welcome to {}", config.shop.name));
    lines.push(shop.inventory().display_line());

    let rose = decorate(create_base_named("rose")?, ribbon.clone());
    lines.push(format!("Selected bouquet: {}", rose.description()));
    lines.push(format!("Total cost: ${:.2}", rose.cost()));

    let standard = StandardPricing;
    let discounted = DiscountPricing::new(config.pricing.discount_retention);
    lines.push(format!("Standard Pricing: ${:.2}", standard.apply(SAMPLE_BASE_PRICE)));
    lines.push(format!("Discounted Pricing: ${:.2}", discounted.apply(SAMPLE_BASE_PRICE)));

    for kind in ["Basic", "Premium"] {
        let arrangement = compose(create_base_named(kind)?, std::slice::from_ref(&ribbon));
        lines.push(format!("{} Cost: ${:.2}", arrangement.description(), arrangement.cost()));
    }

    let adapted = FlowerAdapter::adapt(&RawFlower::new("Rose"))
        .with_unit_cost(config.decorations.adapted_flower_cost);
    lines.push(format!("{} Cost: ${:.2}", adapted.description(), adapted.cost()));

    let card = CreditCardPayment::new("1234", "Aruzhan");
    let summary = shop.checkout(OrderRequest::new("rose").with_decoration(ribbon), &card)?;
    lines.push(summary.receipt.message.clone());
    lines.push(format!(
        "Order {}: {} at ${:.2} ({} pricing, list ${:.2})",
        summary.order_id.simple(),
        summary.description,
        summary.total,
        summary.pricing,
        summary.list_price
    ));
    for failure in &summary.broadcast.failures {
        lines.push(format!("Could not notify {}: {}", failure.subscriber_id, failure.error));
    }
    if let Some(level) = shop.inventory().get(summary.kind) {
        lines.push(format!(
            "{} left in stock: {}",
            summary.kind.description(),
            level.available_quantity
        ));
    }

    let report = shop.announce("New flower arrangements available!");
    lines.push(format!(
        "Announcement delivered to {} of {} subscribers",
        report.delivered,
        report.attempted()
    ));

    Ok(lines)
}
