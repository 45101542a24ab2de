//! Main orchestrator that drives a recipe through its agents
//!
//! Execution is strictly sequential: modules run in recipe order, the first
//! failure halts the pipeline, and every previously successful module is
//! rolled back in reverse order. Rollback is best-effort; its failures are
//! logged and never escalate. There are no retries and no parallelism.

use crate::agents::{self, Agent};
use crate::error::{Error, Result};
use crate::registry::PluginRegistry;
use crate::types::{
    AgentResult, Artifact, Diagnostic, ExecutionContext, ExecutionReport, ExecutionStatus, Module,
    ModuleCategory, ProjectManifest, Recipe,
};
use std::collections::HashMap;
use std::fs;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

pub struct Orchestrator {
    registry: PluginRegistry,
    agents: HashMap<ModuleCategory, Box<dyn Agent>>,
}

impl Orchestrator {
    /// Orchestrator over the built-in plugin catalog and agents
    pub fn new() -> Self {
        Self::with_registry(PluginRegistry::with_builtins())
    }

    /// Orchestrator with a custom registry (built-in agents still apply)
    pub fn with_registry(registry: PluginRegistry) -> Self {
        let agents = agents::builtin_agents()
            .into_iter()
            .map(|agent| (agent.category(), agent))
            .collect();
        Self { registry, agents }
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Pre-flight recipe checks, collected before anything executes
    pub fn validate(&self, recipe: &Recipe) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if recipe.project_name.trim().is_empty() {
            diagnostics.push(Diagnostic::error(
                "empty-project-name",
                "recipe has no project name",
            ));
        }

        let mut seen: Vec<&str> = Vec::new();
        for module in &recipe.modules {
            if !module.id.is_empty() {
                if seen.contains(&module.id.as_str()) {
                    diagnostics.push(Diagnostic::warning(
                        "duplicate-module",
                        format!("module '{}' appears more than once", module.id),
                    ));
                }
                seen.push(&module.id);
            }
        }

        if let Some(first) = recipe.modules.first() {
            if first.category != ModuleCategory::Foundation {
                diagnostics.push(Diagnostic::warning(
                    "foundation-not-first",
                    "the first module is not a foundation module; later plugins may find no package.json",
                ));
            }
        }

        diagnostics
    }

    /// Run the recipe's modules in order against the target directory
    pub fn execute(&self, recipe: &Recipe, ctx: &ExecutionContext) -> Result<ExecutionReport> {
        let run_start = Instant::now();

        let diagnostics = self.validate(recipe);
        for diagnostic in &diagnostics {
            if diagnostic.is_error() {
                error!("{diagnostic}");
            } else {
                warn!("{diagnostic}");
            }
        }
        if diagnostics.iter().any(Diagnostic::is_error) {
            let messages: Vec<String> = diagnostics
                .iter()
                .filter(|d| d.is_error())
                .map(ToString::to_string)
                .collect();
            return Err(Error::ValidationError(messages.join("; ")));
        }

        fs::create_dir_all(&ctx.project_dir)?;

        let total = recipe.modules.len();
        let mut results: Vec<AgentResult> = Vec::with_capacity(total);
        let mut executed: Vec<&Module> = Vec::new();
        let mut status = ExecutionStatus::Success;

        for (index, module) in recipe.modules.iter().enumerate() {
            let Some(agent) = self.agents.get(&module.category) else {
                results.push(AgentResult::failure(
                    module.category.as_str(),
                    &module.id,
                    vec![Diagnostic::error(
                        "agent-not-found",
                        format!("no agent registered for category '{}'", module.category),
                    )],
                    Duration::ZERO,
                ));
                status = ExecutionStatus::FailedAt { index };
                break;
            };

            info!(
                "[{}/{}] Executing {} module",
                index + 1,
                total,
                module.category
            );
            let result = agent.execute(ctx, module, &self.registry);
            let succeeded = result.success;
            results.push(result);

            if succeeded {
                executed.push(module);
            } else {
                status = ExecutionStatus::FailedAt { index };
                break;
            }
        }

        if let ExecutionStatus::FailedAt { index } = status {
            warn!(
                "Module {} of {} failed, rolling back {} completed module(s)",
                index + 1,
                total,
                executed.len()
            );
            self.rollback_executed(ctx, &executed);
        }

        let artifacts = aggregate_artifacts(&results);

        if status == ExecutionStatus::Success {
            let manifest = ProjectManifest::new(
                &recipe.project_name,
                &recipe.framework,
                recipe.modules.clone(),
                artifacts.clone(),
            );
            manifest.write(&ctx.project_dir)?;
            info!("Wrote {}", ProjectManifest::path(&ctx.project_dir).display());
        }

        Ok(ExecutionReport {
            status,
            results,
            artifacts,
            duration: run_start.elapsed(),
        })
    }

    /// Undo completed modules in reverse order; failures are logged only
    fn rollback_executed(&self, ctx: &ExecutionContext, executed: &[&Module]) {
        for module in executed.iter().rev() {
            let Some(agent) = self.agents.get(&module.category) else {
                continue;
            };
            match agent.rollback(ctx, module, &self.registry) {
                Ok(()) => info!("Rolled back {} module", module.category),
                Err(e) => warn!("Rollback of {} module failed: {e}", module.category),
            }
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

/// Successful results' artifacts in order, deduplicated by path (a later
/// module rewriting package.json supersedes the earlier entry)
fn aggregate_artifacts(results: &[AgentResult]) -> Vec<Artifact> {
    let mut artifacts: Vec<Artifact> = Vec::new();
    for result in results.iter().filter(|r| r.success) {
        for artifact in &result.artifacts {
            if let Some(existing) = artifacts.iter_mut().find(|a| a.path == artifact.path) {
                *existing = artifact.clone();
            } else {
                artifacts.push(artifact.clone());
            }
        }
    }
    artifacts
}
