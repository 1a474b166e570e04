//! Planner configuration.
//!
//! Load order: TOML file → environment variables → defaults.
//!
//! ```toml
//! [planner]
//! duplicate_categories = "repeat"
//! exhausted_categories = "terminate"
//! parallel_lookups = true
//!
//! [repository]
//! base_url = "http://places.internal:8080"
//! timeout_secs = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::http::HttpRepositoryConfig;
use crate::planner::PlanOptions;

pub const ENV_BASE_URL: &str = "ROUTE_PLANNER_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "ROUTE_PLANNER_TIMEOUT_SECS";
pub const ENV_PARALLEL_LOOKUPS: &str = "ROUTE_PLANNER_PARALLEL_LOOKUPS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutePlannerConfig {
    pub planner: PlanOptions,
    pub repository: HttpRepositoryConfig,
}

impl RoutePlannerConfig {
    /// Load from `path` if it exists, then apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)?
        } else {
            info!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_BASE_URL) {
            self.repository.base_url = base_url;
        }
        override_parsed(&lookup, ENV_TIMEOUT_SECS, &mut self.repository.timeout_secs);
        override_parsed(&lookup, ENV_PARALLEL_LOOKUPS, &mut self.planner.parallel_lookups);
    }
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *target = value,
        Err(_) => warn!(key, value = %raw, "ignoring unparsable override"),
    }
}
