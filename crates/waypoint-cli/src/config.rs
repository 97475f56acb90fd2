//! Configuration management for waypoint.
//!
//! Settings come from, in increasing priority:
//!
//! 1. built-in defaults
//! 2. a YAML file (`--config <path>`, or `waypoint.yaml` in the working directory)
//! 3. environment variables (`WAYPOINT_CAPACITY`, `WAYPOINT_PRECISION`, `NO_COLOR`)
//! 4. command-line flags (applied by the CLI)
//!
//! ```yaml
//! capacity: 128
//! precision: 2
//! output:
//!   color: true
//! ```

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "waypoint.yaml";

/// Default node capacity of a session graph.
pub const DEFAULT_CAPACITY: usize = 64;

/// Default number of decimals in dumps and matrices.
pub const DEFAULT_PRECISION: usize = waypoint::graph::DEFAULT_PRECISION;

/// Upper bound accepted for `capacity`.
pub const MAX_CAPACITY: usize = waypoint::MAX_CAPACITY;

/// Upper bound accepted for `precision`.
pub const MAX_PRECISION: usize = 12;

/// Effective configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WaypointConfig {
    /// Maximum number of nodes in the session graph.
    pub capacity: usize,

    /// Decimals printed for weights and distances.
    pub precision: usize,

    /// Output settings.
    pub output: OutputSettings,
}

/// Output section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    /// Whether human-readable output uses colors.
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            precision: DEFAULT_PRECISION,
            output: OutputSettings::default(),
        }
    }
}

impl WaypointConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `waypoint.yaml` in `dir` is
    /// used when present. Environment overrides are applied last.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(path)?
            }
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "loading config");
                    Self::load(&candidate)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply environment-style overrides through `lookup`.
    ///
    /// Invalid values are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("WAYPOINT_CAPACITY").filter(|v| !v.is_empty()) {
            match value.parse() {
                Ok(capacity) => self.capacity = capacity,
                Err(_) => tracing::warn!(
                    env_var = "WAYPOINT_CAPACITY",
                    value = %value,
                    default = self.capacity,
                    "Invalid value, keeping current setting"
                ),
            }
        }

        if let Some(value) = lookup("WAYPOINT_PRECISION").filter(|v| !v.is_empty()) {
            match value.parse() {
                Ok(precision) => self.precision = precision,
                Err(_) => tracing::warn!(
                    env_var = "WAYPOINT_PRECISION",
                    value = %value,
                    default = self.precision,
                    "Invalid value, keeping current setting"
                ),
            }
        }

        // Respect NO_COLOR standard (https://no-color.org/)
        if lookup("NO_COLOR").is_some() {
            self.output.color = false;
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(Error::Config("capacity must be at least 1".to_string()));
        }
        if self.capacity > MAX_CAPACITY {
            return Err(Error::Config(format!("capacity cannot exceed {MAX_CAPACITY}")));
        }
        if self.precision > MAX_PRECISION {
            return Err(Error::Config(format!("precision cannot exceed {MAX_PRECISION}")));
        }
        Ok(())
    }
}
