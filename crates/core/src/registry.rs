//! Plugin registry
//!
//! Keyed lookup from plugin id to plugin instance. Registration happens once
//! at startup; lookups are a pure function of the id for the lifetime of the
//! process.

use crate::plugin::Plugin;
use crate::plugins;
use crate::types::ModuleCategory;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub struct PluginRegistry {
    plugins: HashMap<&'static str, Arc<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Registry preloaded with every built-in plugin
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for plugin in plugins::builtins() {
            registry.register(plugin);
        }
        registry
    }

    pub fn register(&mut self, plugin: Arc<dyn Plugin>) {
        let id = plugin.metadata().id;
        debug!("Registering plugin '{id}'");
        self.plugins.insert(id, plugin);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(id).cloned()
    }

    /// All registered ids, sorted for stable output
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.plugins.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Plugins serving one category, sorted by id
    pub fn for_category(&self, category: ModuleCategory) -> Vec<Arc<dyn Plugin>> {
        let mut matching: Vec<_> = self
            .plugins
            .values()
            .filter(|p| p.metadata().category == category)
            .cloned()
            .collect();
        matching.sort_by_key(|p| p.metadata().id);
        matching
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_every_category() {
        let registry = PluginRegistry::with_builtins();
        for category in ModuleCategory::ALL {
            assert!(
                !registry.for_category(category).is_empty(),
                "no builtin plugin for category '{category}'"
            );
        }
    }

    #[test]
    fn lookup_is_stable_for_a_given_id() {
        let registry = PluginRegistry::with_builtins();
        let first = registry.get("drizzle").unwrap();
        let second = registry.get("drizzle").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(registry.get("no-such-plugin").is_none());
    }
}
