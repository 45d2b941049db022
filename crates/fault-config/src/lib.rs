//! # fault-config
//!
//! Layered configuration loading for Faultline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FAULTLINE_*` prefix, `__` as separator)
//! 2. Project-level `.faultline/config.toml`
//! 3. User-level `~/.config/faultline/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FAULTLINE_PROBE__REPEAT` -> `probe.repeat`,
//! `FAULTLINE_BOUNDARY__RUNTIME_KINDS` -> `boundary.runtime_kinds`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use fault_config::FaultConfig;
//!
//! let config = FaultConfig::load_with_dotenv().expect("config");
//! let boundary = config.boundary.boundary();
//! println!("probing {} operations", config.probe.operations.len());
//! ```

mod boundary;
mod error;
mod probe;

pub use boundary::BoundaryConfig;
pub use error::ConfigError;
pub use probe::ProbeConfig;

use fault_core::MAX_REPEAT;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FaultConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub boundary: BoundaryConfig,
}

impl FaultConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`FaultConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`FaultConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".faultline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FAULTLINE_").split("__"))
    }

    /// Reject values the probe cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a `probe.repeat` outside
    /// `1..=MAX_REPEAT` or an empty `probe.operations`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe.repeat == 0 {
            return Err(ConfigError::InvalidValue {
                field: "probe.repeat".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.probe.repeat > MAX_REPEAT {
            return Err(ConfigError::InvalidValue {
                field: "probe.repeat".to_string(),
                reason: format!("must be at most {MAX_REPEAT}"),
            });
        }
        if self.probe.operations.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "probe.operations".to_string(),
                reason: "must list at least one operation".to_string(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("faultline").join("config.toml"))
    }

    /// Load `.env` from the workspace root, falling back to the current dir.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fault_core::Operation;

    #[test]
    fn default_config_is_valid() {
        let config = FaultConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.boundary.runtime_kinds.is_empty());
    }

    #[test]
    fn zero_repeat_is_rejected() {
        let mut config = FaultConfig::default();
        config.probe.repeat = 0;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "probe.repeat")
        );
    }

    #[test]
    fn repeat_above_cap_is_rejected() {
        let mut config = FaultConfig::default();
        config.probe.repeat = MAX_REPEAT;
        assert!(config.validate().is_ok());

        config.probe.repeat = u32::MAX;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "probe.repeat")
        );
    }

    #[test]
    fn empty_operations_are_rejected() {
        let mut config = FaultConfig::default();
        config.probe.operations.clear();
        assert!(config.validate().is_err());

        config.probe.operations.push(Operation::Op3);
        assert!(config.validate().is_ok());
    }
}
