//! Scheduling configuration file support.
//!
//! Deployment-tunable knobs for the scheduling core, read from a TOML file:
//!
//! ```toml
//! [scheduling]
//! max_horizon_days = 60
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::services::DEFAULT_MAX_HORIZON_DAYS;

/// Error reading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Scheduling configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchedulingConfig {
    #[serde(default)]
    pub scheduling: SchedulingSettings,
}

/// Tunables for the auto-selection search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingSettings {
    /// How many days forward `auto_select` may walk before giving up.
    #[serde(default = "default_max_horizon_days")]
    pub max_horizon_days: u32,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            max_horizon_days: default_max_horizon_days(),
        }
    }
}

fn default_max_horizon_days() -> u32 {
    DEFAULT_MAX_HORIZON_DAYS
}

impl SchedulingConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
