//! Plugin registry.
//!
//! Maps plugin names to factories. A registry is an ordinary value that
//! the host builds and passes to [`crate::Framework::new`]; there is no
//! process-wide registry.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::charge_rate_sort::{self, ChargeRateSort};
use crate::error::{FrameworkError, FrameworkResult};
use crate::plugin::{FilterPlugin, Handle};

/// Builds a filter plugin from its (optional) args and the host handle.
pub type PluginFactory =
    fn(Option<&toml::Value>, Arc<dyn Handle>) -> FrameworkResult<Arc<dyn FilterPlugin>>;

/// Name → factory map.
#[derive(Clone, Default)]
pub struct Registry {
    factories: BTreeMap<String, PluginFactory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a factory. Names must be unique.
    pub fn register(&mut self, name: &str, factory: PluginFactory) -> FrameworkResult<()> {
        if self.factories.contains_key(name) {
            return Err(FrameworkError::DuplicatePlugin(name.to_string()));
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }

    /// Move every factory of `other` into this registry.
    pub fn merge(&mut self, other: Registry) -> FrameworkResult<()> {
        for (name, factory) in other.factories {
            self.register(&name, factory)?;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Instantiate the plugin registered under `name`.
    pub fn build(
        &self,
        name: &str,
        args: Option<&toml::Value>,
        handle: Arc<dyn Handle>,
    ) -> FrameworkResult<Arc<dyn FilterPlugin>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| FrameworkError::UnknownPlugin(name.to_string()))?;
        factory(args, handle)
    }
}

/// Registry with every plugin shipped in this crate.
pub fn in_tree_registry() -> Registry {
    let mut registry = Registry::new();
    registry
        .factories
        .insert(charge_rate_sort::NAME.to_string(), ChargeRateSort::factory);
    registry
}
