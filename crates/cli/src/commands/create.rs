use anyhow::{bail, Context, Result};
use std::{env, path::PathBuf};
use tracing::debug;

use architech_core::config::load_recipe;
use architech_core::types::{ExecutionContext, Module, ModuleCategory, Recipe};
use architech_core::Orchestrator;

use crate::display::{print_plan, print_report};

pub struct CreateArgs {
    pub name: String,
    pub framework: String,
    pub database: Option<String>,
    pub auth: Option<String>,
    pub ui: Option<String>,
    pub monitoring: Option<String>,
    pub testing: Option<String>,
    pub deployment: Option<String>,
    pub recipe: Option<PathBuf>,
    pub package_manager: String,
    pub path: Option<PathBuf>,
    pub no_install: bool,
    pub dry_run: bool,
}

pub fn create_command(args: CreateArgs) -> Result<()> {
    let recipe = build_recipe(&args)?;

    if args.dry_run {
        print_plan(&recipe);
        return Ok(());
    }

    let parent = match args.path {
        Some(ref path) => path.clone(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_dir = parent.join(&recipe.project_name);
    if project_dir.join("package.json").exists() {
        bail!(
            "❌ {} already contains a project (delete it or pick another name)",
            project_dir.display()
        );
    }

    println!(
        "🚀 Creating '{}' in {}",
        recipe.project_name,
        project_dir.display()
    );

    let orchestrator = Orchestrator::new();
    let ctx = ExecutionContext::for_recipe(&recipe, &project_dir).with_skip_install(args.no_install);
    let report = orchestrator
        .execute(&recipe, &ctx)
        .context("Failed to execute recipe")?;

    print_report(&report);
    if !report.success() {
        bail!("project generation failed");
    }

    println!("\n✅ Created {}", project_dir.display());
    if args.no_install {
        println!(
            "   Run `{} install` inside the project to fetch dependencies",
            recipe.package_manager
        );
    }
    Ok(())
}

/// Build the recipe from a file or from the module flags
fn build_recipe(args: &CreateArgs) -> Result<Recipe> {
    if let Some(ref recipe_path) = args.recipe {
        debug!("Loading recipe from {}", recipe_path.display());
        let mut recipe = load_recipe(recipe_path)
            .with_context(|| format!("Failed to load recipe {}", recipe_path.display()))?;
        // CLI name wins over the one in the file
        recipe.project_name = args.name.clone();
        return Ok(recipe);
    }

    let mut recipe = Recipe::new(&args.name, &args.framework);
    recipe.package_manager = args
        .package_manager
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    recipe
        .modules
        .push(Module::new(&args.framework, ModuleCategory::Foundation));

    let selections = [
        (&args.database, ModuleCategory::Database),
        (&args.auth, ModuleCategory::Auth),
        (&args.ui, ModuleCategory::Ui),
        (&args.monitoring, ModuleCategory::Monitoring),
        (&args.testing, ModuleCategory::Testing),
        (&args.deployment, ModuleCategory::Deployment),
    ];
    for (selection, category) in selections {
        if let Some(plugin_id) = selection {
            recipe.modules.push(Module::new(plugin_id, category));
        }
    }

    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> CreateArgs {
        CreateArgs {
            name: name.to_string(),
            framework: "nextjs".to_string(),
            database: None,
            auth: None,
            ui: None,
            monitoring: None,
            testing: None,
            deployment: None,
            recipe: None,
            package_manager: "npm".to_string(),
            path: None,
            no_install: true,
            dry_run: false,
        }
    }

    #[test]
    fn flags_become_modules_in_pipeline_order() {
        let mut a = args("demo");
        a.database = Some("drizzle".to_string());
        a.testing = Some("vitest".to_string());

        let recipe = build_recipe(&a).unwrap();
        let categories: Vec<_> = recipe.modules.iter().map(|m| m.category).collect();
        assert_eq!(
            categories,
            vec![
                ModuleCategory::Foundation,
                ModuleCategory::Database,
                ModuleCategory::Testing
            ]
        );
        assert_eq!(recipe.modules[0].id, "nextjs");
    }

    #[test]
    fn bad_package_manager_is_rejected() {
        let mut a = args("demo");
        a.package_manager = "cargo".to_string();
        assert!(build_recipe(&a).is_err());
    }
}
