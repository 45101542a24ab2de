use anyhow::{bail, Context, Result};
use std::{env, fs, path::Path};
use tracing::{debug, info};
use walkdir::WalkDir;

use architech_core::project;
use architech_core::types::{ProjectManifest, ProjectStructure};

/// Entries that stay at the repository root during the restructure
const KEEP_AT_ROOT: &[&str] = &[
    "apps",
    "packages",
    "node_modules",
    ".git",
    ".architech.json",
    "turbo.json",
];

pub fn scale_command(path: Option<&Path>, force: bool) -> Result<()> {
    let project_dir = match path {
        Some(path) => path.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let project_name = project::package_name(&project_dir)
        .context("Not a generated project (no readable package.json)")?;

    let apps_web = project_dir.join("apps").join("web");
    if apps_web.exists() && !force {
        bail!(
            "❌ {} already exists (already a monorepo?). Use --force to proceed",
            apps_web.display()
        );
    }

    println!("🏗️  Scaling '{project_name}' to a monorepo");
    fs::create_dir_all(&apps_web)
        .with_context(|| format!("Failed to create {}", apps_web.display()))?;
    fs::create_dir_all(project_dir.join("packages"))?;

    // Move everything app-specific under apps/web/
    for entry in fs::read_dir(&project_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if KEEP_AT_ROOT.contains(&name.as_ref()) {
            continue;
        }
        let target = apps_web.join(&file_name);
        debug!("Moving {} -> {}", entry.path().display(), target.display());
        fs::rename(entry.path(), &target)
            .with_context(|| format!("Failed to move {}", entry.path().display()))?;
    }

    let moved_files = WalkDir::new(&apps_web)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count();
    info!("Moved {moved_files} file(s) into {}", apps_web.display());

    // The app keeps its package.json under the conventional "web" name
    let mut app_package = project::read_package_json(&apps_web)?;
    app_package["name"] = serde_json::json!("web");
    project::write_package_json(&apps_web, &app_package)?;

    // Fresh workspace root
    let root_package = serde_json::json!({
        "name": project_name,
        "private": true,
        "workspaces": ["apps/*", "packages/*"],
        "scripts": {
            "dev": "turbo run dev",
            "build": "turbo run build",
            "lint": "turbo run lint",
            "test": "turbo run test"
        },
        "devDependencies": {
            "turbo": "^2.3.0"
        }
    });
    project::write_package_json(&project_dir, &root_package)?;

    let turbo = serde_json::json!({
        "$schema": "https://turbo.build/schema.json",
        "tasks": {
            "build": { "dependsOn": ["^build"], "outputs": [".next/**"] },
            "dev": { "cache": false, "persistent": true },
            "lint": {},
            "test": {}
        }
    });
    fs::write(
        project_dir.join("turbo.json"),
        format!("{}\n", serde_json::to_string_pretty(&turbo)?),
    )?;

    // Descriptive only, but keep the manifest in step with reality
    if let Some(mut manifest) = ProjectManifest::load(&project_dir).unwrap_or(None) {
        manifest.structure = ProjectStructure::Monorepo;
        manifest.write(&project_dir)?;
    }

    println!("✅ Restructured into apps/web ({moved_files} files moved)");
    println!("   Root package.json and turbo.json written");
    Ok(())
}
