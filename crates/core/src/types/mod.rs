//! Core data model shared across agents, plugins, and the orchestrator

mod context;
mod diagnostic;
mod manifest;
mod recipe;
mod result;

pub use context::{ExecutionContext, PluginContext};
pub use diagnostic::{Diagnostic, Severity};
pub use manifest::{ProjectManifest, ProjectStructure, MANIFEST_FILE};
pub use recipe::{Module, ModuleCategory, Recipe};
pub use result::{AgentResult, Artifact, Dependency, ExecutionReport, ExecutionStatus, PluginResult};
