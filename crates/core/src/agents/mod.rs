//! Per-concern agents
//!
//! An agent is a thin wrapper over the plugin registry for one category: it
//! selects the plugin for a module (falling back to the category default),
//! builds a fresh plugin context, runs validate then install, and hands the
//! declared dependencies to the package manager. Rollback delegates to the
//! plugin's uninstall.

mod auth;
mod database;
mod deployment;
mod foundation;
mod monitoring;
mod testing;
mod ui;

pub use auth::AuthAgent;
pub use database::DatabaseAgent;
pub use deployment::DeploymentAgent;
pub use foundation::FoundationAgent;
pub use monitoring::MonitoringAgent;
pub use testing::TestingAgent;
pub use ui::UiAgent;

use crate::error::{Error, Result};
use crate::project;
use crate::registry::PluginRegistry;
use crate::types::{
    AgentResult, Diagnostic, ExecutionContext, Module, ModuleCategory, PluginContext,
};
use std::time::Instant;
use tracing::{debug, info};

pub trait Agent: Send + Sync {
    /// The one category this agent owns
    fn category(&self) -> ModuleCategory;

    /// Plugin used when a module names none
    fn default_plugin(&self) -> &'static str;

    /// Category-specific checks on top of the plugin's own validation
    fn validate_module(&self, _module: &Module) -> Vec<Diagnostic> {
        Vec::new()
    }

    fn resolve_plugin_id<'a>(&self, module: &'a Module) -> &'a str {
        if module.id.is_empty() {
            self.default_plugin()
        } else {
            &module.id
        }
    }

    /// Run one module: resolve plugin, validate, install, install deps
    fn execute(
        &self,
        ctx: &ExecutionContext,
        module: &Module,
        registry: &PluginRegistry,
    ) -> AgentResult {
        let start = Instant::now();
        let plugin_id = self.resolve_plugin_id(module).to_string();
        debug!("Agent '{}' executing plugin '{plugin_id}'", self.category());

        let Some(plugin) = registry.get(&plugin_id) else {
            return AgentResult::failure(
                &plugin_id,
                &plugin_id,
                vec![Diagnostic::error(
                    "plugin-not-found",
                    format!("no plugin registered with id '{plugin_id}'"),
                )],
                start.elapsed(),
            );
        };

        let metadata = plugin.metadata();
        if metadata.category != self.category() {
            return AgentResult::failure(
                &plugin_id,
                &plugin_id,
                vec![Diagnostic::error(
                    "category-mismatch",
                    format!(
                        "plugin '{plugin_id}' serves category '{}', not '{}'",
                        metadata.category,
                        self.category()
                    ),
                )],
                start.elapsed(),
            );
        }

        let plugin_ctx = PluginContext::for_module(ctx, &plugin_id, module);

        let mut diagnostics = self.validate_module(module);
        diagnostics.extend(plugin.validate(&plugin_ctx));
        let (errors, warnings): (Vec<_>, Vec<_>) =
            diagnostics.into_iter().partition(Diagnostic::is_error);
        if !errors.is_empty() {
            let mut result = AgentResult::failure(&plugin_id, &plugin_id, errors, start.elapsed());
            result.warnings = warnings;
            return result;
        }

        let mut plugin_result = match plugin.install(&plugin_ctx) {
            Ok(result) => result,
            Err(e) => {
                let mut result = AgentResult::failure(
                    &plugin_id,
                    &plugin_id,
                    vec![Diagnostic::error("install-failed", e.to_string())],
                    start.elapsed(),
                );
                result.warnings = warnings;
                return result;
            }
        };
        plugin_result.warnings.splice(0..0, warnings);

        if plugin_result.success {
            if let Err(e) = self.install_dependencies(ctx, &plugin_result.dependencies) {
                plugin_result.success = false;
                plugin_result
                    .errors
                    .push(Diagnostic::error("dependency-install-failed", e.to_string()));
            }
        }

        plugin_result.duration = start.elapsed();
        info!(
            "Agent '{}' finished plugin '{plugin_id}' ({} artifacts)",
            self.category(),
            plugin_result.artifacts.len()
        );
        AgentResult::from_plugin(&plugin_id, &plugin_id, plugin_result)
    }

    /// Merge declared dependencies into package.json, then run the package
    /// manager unless the context skips installation
    fn install_dependencies(
        &self,
        ctx: &ExecutionContext,
        dependencies: &[crate::types::Dependency],
    ) -> Result<()> {
        if dependencies.is_empty() {
            return Ok(());
        }
        project::merge_dependencies(&ctx.project_dir, dependencies)?;
        if ctx.skip_install {
            debug!("Skipping {} install (skip_install set)", ctx.package_manager);
            return Ok(());
        }
        ctx.package_manager.install(&ctx.project_dir)
    }

    /// Undo a previously successful execution, best-effort
    fn rollback(
        &self,
        ctx: &ExecutionContext,
        module: &Module,
        registry: &PluginRegistry,
    ) -> Result<()> {
        let plugin_id = self.resolve_plugin_id(module);
        let plugin = registry
            .get(plugin_id)
            .ok_or_else(|| Error::UnknownPlugin(plugin_id.to_string()))?;
        plugin.uninstall(&PluginContext::for_module(ctx, plugin_id, module))
    }
}

/// One agent per category, in no particular order
pub fn builtin_agents() -> Vec<Box<dyn Agent>> {
    vec![
        Box::new(FoundationAgent),
        Box::new(DatabaseAgent),
        Box::new(AuthAgent),
        Box::new(UiAgent),
        Box::new(DeploymentAgent),
        Box::new(MonitoringAgent),
        Box::new(TestingAgent),
    ]
}
