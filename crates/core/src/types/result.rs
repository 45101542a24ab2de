//! Results returned up the plugin -> agent -> orchestrator chain

use super::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// A file generated into the target project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Path relative to the project root
    pub path: PathBuf,
    /// md5 digest of the written contents
    pub checksum: String,
}

/// An npm dependency a plugin wants installed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
    pub dev: bool,
}

impl Dependency {
    pub fn runtime(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dev: false,
        }
    }

    pub fn dev(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            dev: true,
        }
    }
}

/// Outcome of a single plugin installation
#[derive(Debug, Clone, Default)]
pub struct PluginResult {
    pub success: bool,
    pub artifacts: Vec<Artifact>,
    pub dependencies: Vec<Dependency>,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
    pub duration: Duration,
}

impl PluginResult {
    pub fn failure(errors: Vec<Diagnostic>, duration: Duration) -> Self {
        Self {
            success: false,
            errors,
            duration,
            ..Default::default()
        }
    }
}

/// Outcome of one agent executing one module
#[derive(Debug, Clone)]
pub struct AgentResult {
    pub module_id: String,
    pub plugin_id: String,
    pub success: bool,
    pub artifacts: Vec<Artifact>,
    pub dependencies: Vec<Dependency>,
    pub warnings: Vec<Diagnostic>,
    pub errors: Vec<Diagnostic>,
    pub duration: Duration,
}

impl AgentResult {
    pub fn failure(
        module_id: impl Into<String>,
        plugin_id: impl Into<String>,
        errors: Vec<Diagnostic>,
        duration: Duration,
    ) -> Self {
        Self {
            module_id: module_id.into(),
            plugin_id: plugin_id.into(),
            success: false,
            artifacts: Vec::new(),
            dependencies: Vec::new(),
            warnings: Vec::new(),
            errors,
            duration,
        }
    }

    pub fn from_plugin(
        module_id: impl Into<String>,
        plugin_id: impl Into<String>,
        result: PluginResult,
    ) -> Self {
        Self {
            module_id: module_id.into(),
            plugin_id: plugin_id.into(),
            success: result.success,
            artifacts: result.artifacts,
            dependencies: result.dependencies,
            warnings: result.warnings,
            errors: result.errors,
            duration: result.duration,
        }
    }
}

/// Terminal state of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    /// All modules ran
    Success,
    /// The module at `index` failed; nothing after it executed
    FailedAt { index: usize },
}

/// Aggregated outcome of a full orchestrator run
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub status: ExecutionStatus,
    pub results: Vec<AgentResult>,
    pub artifacts: Vec<Artifact>,
    pub duration: Duration,
}

impl ExecutionReport {
    pub fn success(&self) -> bool {
        self.status == ExecutionStatus::Success
    }

    /// Errors of the failing module, if the run failed
    pub fn failure_errors(&self) -> &[Diagnostic] {
        match self.status {
            ExecutionStatus::Success => &[],
            ExecutionStatus::FailedAt { index } => self
                .results
                .get(index)
                .map(|r| r.errors.as_slice())
                .unwrap_or(&[]),
        }
    }
}
