//! CLI configuration module.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. AppConfig::default()          rates_path = "sample.json" ...       │
//! │  2. parkline.toml (or --config)   optional unless named explicitly     │
//! │  3. PARKLINE_* environment        PARKLINE_INVENTORY__CAR_SUV=40       │
//! │                                                                         │
//! │  later layers override earlier ones                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use parkline_core::{FacilityKind, InventoryCap, VehicleClass};
use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "parkline.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PARKLINE";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fee model JSON document
    pub rates_path: String,

    /// Facility kind tag (Mall, Stadium, Airport)
    pub facility: String,

    /// Fallback tracing filter when RUST_LOG is unset
    pub log_filter: String,

    /// Spots per vehicle class
    pub inventory: InventoryConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rates_path: "sample.json".to_string(),
            facility: "Mall".to_string(),
            log_filter: "info,parkline_core=debug".to_string(),
            inventory: InventoryConfig::default(),
        }
    }
}

/// Spot counts keyed the way they appear in TOML and env keys.
///
/// A count of zero means the class is not stocked at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub motorcycle: u32,
    pub car_suv: u32,
    pub bus_truck: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig {
            motorcycle: 2,
            car_suv: 0,
            bus_truck: 0,
        }
    }
}

impl InventoryConfig {
    /// Converts to the core inventory, leaving out unstocked classes.
    pub fn to_cap(&self) -> InventoryCap {
        [
            (VehicleClass::TwoWheeler, self.motorcycle),
            (VehicleClass::FourWheeler, self.car_suv),
            (VehicleClass::HeavyVehicle, self.bus_truck),
        ]
        .into_iter()
        .filter(|(_, total)| *total > 0)
        .collect()
    }
}

impl AppConfig {
    /// Loads configuration from defaults, the config file and the
    /// environment.
    ///
    /// A file named with `path` must exist; the default `parkline.toml` is
    /// optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (file, required) = match path {
            Some(path) => (path.to_string_lossy().into_owned(), true),
            None => (DEFAULT_CONFIG_FILE.to_string(), false),
        };

        let config: AppConfig = ::config::Config::builder()
            .add_source(::config::Config::try_from(&AppConfig::default())?)
            .add_source(::config::File::new(&file, ::config::FileFormat::Toml).required(required))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// The facility kind named by `facility`.
    pub fn facility_kind(&self) -> Result<FacilityKind, ConfigError> {
        self.facility
            .parse()
            .map_err(|_| ConfigError::InvalidValue("facility".to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rates_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("rates_path".to_string()));
        }
        self.facility_kind()?;
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Source(#[from] ::config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("parkline-{}-{}.toml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_stock_motorcycles_only() {
        let config = AppConfig::default();
        assert_eq!(config.facility_kind().unwrap(), FacilityKind::Mall);

        let cap = config.inventory.to_cap();
        assert_eq!(cap.capacity(VehicleClass::TwoWheeler), Some(2));
        assert_eq!(cap.capacity(VehicleClass::HeavyVehicle), None);
    }

    #[test]
    fn test_load_explicit_file() {
        let path = write_temp(
            "explicit",
            r#"
rates_path = "rates/airport.json"
facility = "Airport"

[inventory]
motorcycle = 200
car_suv = 500
"#,
        );

        let config = AppConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.rates_path, "rates/airport.json");
        assert_eq!(config.facility_kind().unwrap(), FacilityKind::Airport);
        assert_eq!(config.inventory.car_suv, 500);
        assert_eq!(config.inventory.bus_truck, 0);
        // Untouched keys keep their defaults.
        assert_eq!(config.log_filter, AppConfig::default().log_filter);
    }

    #[test]
    fn test_load_rejects_unknown_facility() {
        let path = write_temp("bad-facility", "facility = \"Harbour\"\n");

        let result = AppConfig::load(Some(&path));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::InvalidValue(ref key)) if key == "facility"));
    }

    #[test]
    fn test_load_requires_named_file() {
        let path = std::env::temp_dir().join("parkline-does-not-exist.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Source(_))
        ));
    }

    #[test]
    fn test_empty_rates_path_is_missing() {
        let config = AppConfig {
            rates_path: "  ".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
