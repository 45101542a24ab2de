//! Execution and plugin contexts
//!
//! The execution context is created once per run from the recipe. A plugin
//! context is a fresh copy handed to a single plugin invocation, augmented
//! with the plugin id and the module's parameters, and discarded afterwards.

use super::{Module, Recipe};
use crate::package_manager::PackageManager;
use std::path::PathBuf;

/// Run-wide context, shared read-only across agents
#[derive(Debug, Clone)]
pub struct ExecutionContext {
    /// Absolute path of the target project directory
    pub project_dir: PathBuf,
    pub project_name: String,
    pub framework: String,
    pub package_manager: PackageManager,
    /// Skip subprocess dependency installation (dependencies are still
    /// merged into package.json)
    pub skip_install: bool,
}

impl ExecutionContext {
    pub fn for_recipe(recipe: &Recipe, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            project_name: recipe.project_name.clone(),
            framework: recipe.framework.clone(),
            package_manager: recipe.package_manager,
            skip_install: false,
        }
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }
}

/// Per-invocation context handed to a plugin
#[derive(Debug, Clone)]
pub struct PluginContext {
    pub project_dir: PathBuf,
    pub project_name: String,
    pub framework: String,
    pub package_manager: PackageManager,
    pub skip_install: bool,
    pub plugin_id: String,
    /// Plugin-specific config, copied from the module's parameters
    pub config: serde_json::Map<String, serde_json::Value>,
    pub features: std::collections::BTreeMap<String, bool>,
}

impl PluginContext {
    pub fn for_module(ctx: &ExecutionContext, plugin_id: impl Into<String>, module: &Module) -> Self {
        Self {
            project_dir: ctx.project_dir.clone(),
            project_name: ctx.project_name.clone(),
            framework: ctx.framework.clone(),
            package_manager: ctx.package_manager,
            skip_install: ctx.skip_install,
            plugin_id: plugin_id.into(),
            config: module.parameters.clone(),
            features: module.features.clone(),
        }
    }

    /// String config lookup; non-string values are ignored
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(|v| v.as_str())
    }

    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }
}
