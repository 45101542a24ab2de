//! Plugin interface
//!
//! A plugin is one concrete technology (Drizzle, Better Auth, ...). It
//! renders its template set into the project, declares the npm dependencies
//! it needs, and knows how to remove its own files again on rollback.

use crate::error::Result;
use crate::types::{Diagnostic, ModuleCategory, PluginContext, PluginResult};

/// Metadata about a plugin
#[derive(Debug, Clone)]
pub struct PluginMetadata {
    /// Registry key (e.g. "drizzle")
    pub id: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Version of the generated integration
    pub version: &'static str,

    /// The one concern this plugin serves
    pub category: ModuleCategory,

    pub description: &'static str,
}

/// Main plugin interface
pub trait Plugin: Send + Sync {
    /// Get plugin metadata
    fn metadata(&self) -> PluginMetadata;

    /// Check the context before installation; diagnostics with error
    /// severity abort the module
    fn validate(&self, _ctx: &PluginContext) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Generate files and declare dependencies
    fn install(&self, ctx: &PluginContext) -> Result<PluginResult>;

    /// Remove the files this plugin generated (best-effort rollback)
    fn uninstall(&self, ctx: &PluginContext) -> Result<()>;
}
