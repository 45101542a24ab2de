use anyhow::{bail, Context, Result};
use std::{env, path::Path};
use tracing::debug;

use architech_core::types::{ExecutionContext, Module, ModuleCategory, ProjectManifest, Recipe};
use architech_core::{project, Orchestrator};

use crate::display::print_report;

pub fn add_command(
    module_id: &str,
    category: Option<&str>,
    path: Option<&Path>,
    no_install: bool,
) -> Result<()> {
    let project_dir = match path {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_name = project::package_name(&project_dir)
        .context("Not a generated project (no readable package.json)")?;

    let orchestrator = Orchestrator::new();
    let category = resolve_category(&orchestrator, module_id, category)?;
    debug!("Adding '{module_id}' ({category}) to {}", project_dir.display());

    // The existing manifest, so the rewrite below can keep earlier modules
    let previous = ProjectManifest::load(&project_dir).unwrap_or(None);
    let framework = previous
        .as_ref()
        .map(|m| m.framework.clone())
        .unwrap_or_else(|| "nextjs".to_string());

    let mut recipe = Recipe::new(project_name, framework);
    recipe.modules.push(Module::new(module_id, category));

    println!("➕ Adding '{module_id}' to {}", project_dir.display());
    let ctx = ExecutionContext::for_recipe(&recipe, &project_dir).with_skip_install(no_install);
    let report = orchestrator
        .execute(&recipe, &ctx)
        .context("Failed to execute module")?;

    print_report(&report);
    if !report.success() {
        bail!("adding module failed");
    }

    // The orchestrator wrote a single-module manifest; fold the earlier
    // modules back in so the manifest keeps describing the whole project
    if let Some(previous) = previous {
        let mut merged = ProjectManifest::load(&project_dir)?
            .context("manifest missing after successful run")?;
        merged.structure = previous.structure;

        let added_modules = std::mem::take(&mut merged.modules);
        merged.modules = previous.modules;
        merged.modules.extend(added_modules);

        let added_artifacts = std::mem::take(&mut merged.artifacts);
        merged.artifacts = previous.artifacts;
        for artifact in added_artifacts {
            if let Some(existing) = merged
                .artifacts
                .iter_mut()
                .find(|a| a.path == artifact.path)
            {
                *existing = artifact;
            } else {
                merged.artifacts.push(artifact);
            }
        }
        merged.write(&project_dir)?;
    }

    println!("✅ Added '{module_id}'");
    Ok(())
}

/// Use the explicit category, or infer it from the plugin's metadata
fn resolve_category(
    orchestrator: &Orchestrator,
    module_id: &str,
    category: Option<&str>,
) -> Result<ModuleCategory> {
    if let Some(category) = category {
        return category.parse().map_err(|e: String| anyhow::anyhow!(e));
    }
    match orchestrator.registry().get(module_id) {
        Some(plugin) => Ok(plugin.metadata().category),
        None => bail!(
            "unknown plugin '{module_id}' (run `architech list` to see the catalog, \
             or pass --category to force one)"
        ),
    }
}
