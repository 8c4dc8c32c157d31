use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// Default values for configuration
const DEFAULT_LOG_LEVEL: &str = "info";
const CONFIG_DIR: &str = "config";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_truck_capacity() -> Decimal {
    dec!(20000)
}

/// Portal configuration with validation.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortalConfig {
    /// Truck payload capacity in kilograms used for load calculations.
    #[serde(default = "default_truck_capacity")]
    pub truck_capacity_kg: Decimal,

    /// Log level filter used when RUST_LOG is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            truck_capacity_kg: default_truck_capacity(),
            log_level: default_log_level(),
        }
    }
}

impl PortalConfig {
    /// Loads configuration from `config/portal.toml` (optional) layered with
    /// `PORTAL_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(&format!("{}/portal", CONFIG_DIR)).required(false))
            .add_source(Environment::with_prefix("PORTAL"))
            .build()?;

        let config: PortalConfig = settings.try_deserialize()?;
        config.validate_values()?;
        Ok(config)
    }

    fn validate_values(&self) -> Result<(), ConfigError> {
        if self.truck_capacity_kg <= Decimal::ZERO {
            return Err(ConfigError::Message(
                "truck_capacity_kg must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
