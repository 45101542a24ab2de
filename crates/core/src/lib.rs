//! architech-core - generation engine for the architech scaffolding CLI
//!
//! This crate provides functionality to:
//! - Describe a project as a recipe of modules (database, auth, UI, ...)
//! - Resolve each module to a technology plugin and render its template set
//! - Drive the modules sequentially with stop-on-first-failure and
//!   best-effort rollback

pub mod agents;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod package_manager;
pub mod plugin;
pub mod plugins;
pub mod project;
pub mod registry;
pub mod template;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use agents::Agent;
pub use orchestrator::Orchestrator;
pub use package_manager::PackageManager;
pub use plugin::{Plugin, PluginMetadata};
pub use registry::PluginRegistry;
