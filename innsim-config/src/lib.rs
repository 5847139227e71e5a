//! # innsim Configuration
//!
//! Layered configuration for simulation runs.
//!
//! ## Hierarchy
//! 1. Default values
//! 2. `config/innsim.yaml`, when present
//! 3. `INNSIM_*` environment variables, nested keys split on `__`

#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod simulation;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use simulation::SimulationConfig;
pub use telemetry::TelemetryConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/innsim.yaml";
pub const ENV_PREFIX: &str = "INNSIM_";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
pub struct InnsimConfig {
    #[validate(nested)]
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl InnsimConfig {
    /// Loads defaults, then `config/innsim.yaml` if it exists, then the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(InnsimConfig::default()));

        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            figment = figment.merge(Yaml::file(DEFAULT_CONFIG_PATH));
        } else {
            tracing::debug!("{DEFAULT_CONFIG_PATH} not found, using default configuration");
        }

        Self::finish(figment)
    }

    /// Loads defaults, then the given file (which must exist), then the
    /// environment.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let figment =
            Figment::from(Serialized::defaults(InnsimConfig::default())).merge(Yaml::file(path));
        Self::finish(figment)
    }

    fn finish(figment: Figment) -> Result<Self, ConfigError> {
        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use innsim_core::stats::CategoryStatsMode;

    #[test]
    fn full_config_validation() {
        let config = InnsimConfig::default();
        config.validate().expect("Default config should validate");
        assert_eq!(config.simulation.num_rooms, 20);
        assert_eq!(config.simulation.num_days, 14);
        assert_eq!(config.simulation.category_stats, CategoryStatsMode::Literal);
    }

    #[test]
    fn environment_override() {
        Jail::expect_with(|jail| {
            jail.set_env("INNSIM_SIMULATION__NUM_ROOMS", "5");
            jail.set_env("INNSIM_SIMULATION__CATEGORY_STATS", "by-category");
            let config = InnsimConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.simulation.num_rooms, 5);
            assert_eq!(config.simulation.num_days, 14);
            assert_eq!(
                config.simulation.category_stats,
                CategoryStatsMode::ByCategory
            );
            Ok(())
        });
    }

    #[test]
    fn file_then_environment() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/innsim.yaml",
                r#"
simulation:
  num_days: 30
  seed: 99
  start: "2024-06-01T08:00:00"
telemetry:
  log_level: debug
"#,
            )?;
            jail.set_env("INNSIM_SIMULATION__NUM_DAYS", "7");

            let config = InnsimConfig::load().map_err(|e| e.to_string())?;
            assert_eq!(config.simulation.num_days, 7);
            assert_eq!(config.simulation.seed, Some(99));
            assert!(config.simulation.start.is_some());
            assert_eq!(config.telemetry.log_level, "debug");
            Ok(())
        });
    }

    #[test]
    fn rejects_out_of_range_values() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "bad.yaml",
                "simulation:\n  num_rooms: 50000\ntelemetry:\n  log_level: loud\n",
            )?;
            let err = InnsimConfig::load_from_path("bad.yaml").unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)));
            let message = err.to_string();
            assert!(message.contains("num_rooms"));
            assert!(message.contains("log_level"));
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_reported() {
        let err = InnsimConfig::load_from_path("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
