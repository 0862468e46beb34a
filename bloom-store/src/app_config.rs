use bloom_catalog::adapter::ADAPTED_FLOWER_COST;
use bloom_catalog::decoration::RIBBON_SURCHARGE;
use bloom_catalog::{BouquetKind, PricingConfig};
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub decorations: DecorationConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShopConfig {
    #[serde(default = "default_shop_name")]
    pub name: String,
    #[serde(default = "default_stocked_kinds")]
    pub stocked_kinds: Vec<BouquetKind>,
    #[serde(default = "default_initial_stock")]
    pub initial_stock: u32,
}

fn default_shop_name() -> String { "Bloom".to_string() }
fn default_stocked_kinds() -> Vec<BouquetKind> { BouquetKind::ALL.to_vec() }
fn default_initial_stock() -> u32 { 10 }

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: default_shop_name(),
            stocked_kinds: default_stocked_kinds(),
            initial_stock: default_initial_stock(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DecorationConfig {
    #[serde(default = "default_ribbon_surcharge")]
    pub ribbon_surcharge: f64,
    #[serde(default = "default_adapted_flower_cost")]
    pub adapted_flower_cost: f64,
}

fn default_ribbon_surcharge() -> f64 { RIBBON_SURCHARGE }
fn default_adapted_flower_cost() -> f64 { ADAPTED_FLOWER_COST }

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            ribbon_surcharge: default_ribbon_surcharge(),
            adapted_flower_cost: default_adapted_flower_cost(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "default_customers")]
    pub customers: Vec<String>,
    #[serde(default = "default_emails")]
    pub emails: Vec<String>,
}

fn default_customers() -> Vec<String> { vec!["Alice".to_string(), "Bob".to_string()] }
fn default_emails() -> Vec<String> { vec!["aruzhan@gmail.com".to_string()] }

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            customers: default_customers(),
            emails: default_emails(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = config::Config::builder()
            // Every file is optional; missing keys fall back to built-in defaults
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `BLOOM__PRICING__STRATEGY=standard`
            .add_source(
                config::Environment::with_prefix("BLOOM")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("shop.stocked_kinds")
                    .with_list_parse_key("notifications.customers")
                    .with_list_parse_key("notifications.emails")
                    .try_parsing(true),
            );

        tracing::debug!(%run_mode, "loading configuration");
        Self::build(builder)
    }

    /// Deserialize and validate whatever sources `builder` holds
    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let retention = self.pricing.discount_retention;
        if !(retention > 0.0 && retention <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "pricing.discount_retention must be in (0, 1], got {}",
                retention
            )));
        }
        if !(self.decorations.ribbon_surcharge >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "decorations.ribbon_surcharge must not be negative, got {}",
                self.decorations.ribbon_surcharge
            )));
        }
        if !(self.decorations.adapted_flower_cost >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "decorations.adapted_flower_cost must not be negative, got {}",
                self.decorations.adapted_flower_cost
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_catalog::PricingStrategyKind;
    use config::{File, FileFormat};

    fn from_toml(toml: &str) -> Result<Config, ConfigError> {
        Config::build(config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn test_empty_sources_use_defaults() {
        let config = Config::build(config::Config::builder()).unwrap();

        assert_eq!(config.shop.name, "Bloom");
        assert_eq!(config.shop.initial_stock, 10);
        assert_eq!(config.shop.stocked_kinds.len(), 5);
        assert_eq!(config.pricing.strategy, PricingStrategyKind::Discount);
        assert_eq!(config.pricing.discount_retention, 0.8);
        assert_eq!(config.decorations.ribbon_surcharge, 2.0);
        assert_eq!(config.decorations.adapted_flower_cost, 10.0);
        assert_eq!(config.notifications.customers, vec!["Alice", "Bob"]);
        assert_eq!(config.notifications.emails, vec!["aruzhan@gmail.com"]);
    }

    #[test]
    fn test_toml_overrides() {
        let config = from_toml(
            r#"
            [shop]
            name = "Aruzhan Flowers"
            stocked_kinds = ["rose", "tulip"]

            [pricing]
            strategy = "standard"

            [decorations]
            ribbon_surcharge = 5.0

            [notifications]
            customers = ["Carol"]
            "#,
        )
        .unwrap();

        assert_eq!(config.shop.name, "Aruzhan Flowers");
        assert_eq!(config.shop.stocked_kinds, vec![BouquetKind::Rose, BouquetKind::Tulip]);
        assert_eq!(config.pricing.strategy, PricingStrategyKind::Standard);
        assert_eq!(config.decorations.ribbon_surcharge, 5.0);
        assert_eq!(config.notifications.customers, vec!["Carol"]);
        assert_eq!(config.notifications.emails, vec!["aruzhan@gmail.com"]);
    }

    #[test]
    fn test_rejects_bad_retention() {
        let err = from_toml("[pricing]\ndiscount_retention = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        assert!(from_toml("[pricing]\ndiscount_retention = 0.0").is_err());
    }

    #[test]
    fn test_rejects_negative_surcharge() {
        let err = from_toml("[decorations]\nribbon_surcharge = -1.0").unwrap_err();
        assert!(err.to_string().contains("ribbon_surcharge"));
    }

    #[test]
    fn test_unknown_kind_fails_to_load() {
        let err = from_toml("[shop]\nstocked_kinds = [\"orchid\"]").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
