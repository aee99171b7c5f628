//! Scheduler profile configuration (`chargesort.toml`).
//!
//! ```toml
//! [[profiles]]
//! scheduler_name = "default-scheduler"
//!
//! [profiles.plugins.filter]
//! enabled = ["ChargeRateSort"]
//!
//! [profiles.plugin_config.ChargeRateSort]
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::charge_rate_sort;
use crate::error::{FrameworkError, FrameworkResult};

/// Name of the profile used when none is given.
pub const DEFAULT_PROFILE: &str = "default-scheduler";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// One scheduler profile: which plugins run and with which args.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub scheduler_name: String,
    #[serde(default)]
    pub plugins: Plugins,
    /// Per-plugin args, keyed by plugin name.
    #[serde(default)]
    pub plugin_config: HashMap<String, toml::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Plugins {
    #[serde(default)]
    pub filter: PluginSet,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PluginSet {
    /// Plugins in the order they run.
    #[serde(default)]
    pub enabled: Vec<String>,
}

impl SchedulerConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: SchedulerConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Look up a profile by scheduler name.
    pub fn profile(&self, name: &str) -> FrameworkResult<&Profile> {
        self.profiles
            .iter()
            .find(|p| p.scheduler_name == name)
            .ok_or_else(|| FrameworkError::ProfileNotFound(name.to_string()))
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            profiles: vec![Profile::with_filters(
                DEFAULT_PROFILE,
                &[charge_rate_sort::NAME],
            )],
        }
    }
}

impl Profile {
    pub fn with_filters(scheduler_name: &str, filters: &[&str]) -> Self {
        Self {
            scheduler_name: scheduler_name.to_string(),
            plugins: Plugins {
                filter: PluginSet {
                    enabled: filters.iter().map(|s| s.to_string()).collect(),
                },
            },
            plugin_config: HashMap::new(),
        }
    }

    pub fn args_for(&self, plugin: &str) -> Option<&toml::Value> {
        self.plugin_config.get(plugin)
    }
}
