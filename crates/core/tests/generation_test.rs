//! End-to-end generation with the built-in catalog (no package installs)

use architech_core::types::{
    ExecutionContext, ExecutionStatus, Module, ModuleCategory, ProjectManifest, Recipe,
};
use architech_core::Orchestrator;
use tempfile::TempDir;

fn full_recipe() -> Recipe {
    Recipe::new("storefront", "nextjs")
        .with_module(Module::new("nextjs", ModuleCategory::Foundation))
        .with_module(
            Module::new("drizzle", ModuleCategory::Database)
                .with_parameter("dialect", serde_json::json!("sqlite")),
        )
        .with_module(Module::new("better-auth", ModuleCategory::Auth))
        .with_module(Module::new("shadcn", ModuleCategory::Ui))
        .with_module(Module::new("google-analytics", ModuleCategory::Monitoring))
        .with_module(Module::new("vitest", ModuleCategory::Testing))
        .with_module(Module::new("docker", ModuleCategory::Deployment))
}

#[test]
fn generates_a_complete_project() {
    let dir = TempDir::new().unwrap();
    let recipe = full_recipe();
    let ctx = ExecutionContext::for_recipe(&recipe, dir.path()).with_skip_install(true);

    let report = Orchestrator::new().execute(&recipe, &ctx).unwrap();
    assert_eq!(report.status, ExecutionStatus::Success);
    assert_eq!(report.results.len(), 7);

    for file in [
        "package.json",
        "tsconfig.json",
        "src/app/page.tsx",
        "drizzle.config.ts",
        "src/db/schema.ts",
        "src/lib/auth.ts",
        "components.json",
        "src/components/analytics.tsx",
        "vitest.config.ts",
        "Dockerfile",
        "docker-compose.yml",
        ".github/workflows/ci.yml",
    ] {
        assert!(dir.path().join(file).exists(), "missing {file}");
    }

    // Dependencies from every plugin were merged into package.json
    let package: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(package["name"], "storefront");
    assert!(package["dependencies"]["drizzle-orm"].is_string());
    assert!(package["dependencies"]["better-auth"].is_string());
    assert!(package["devDependencies"]["vitest"].is_string());
    assert_eq!(package["scripts"]["test"], "vitest run");
    assert_eq!(package["scripts"]["dev"], "next dev");

    // sqlite dialect picked the sqlite driver and connection string
    assert!(package["dependencies"]["better-sqlite3"].is_string());
    assert!(package["dependencies"]["postgres"].is_null());
    let env = std::fs::read_to_string(dir.path().join(".env")).unwrap();
    assert!(env.contains("DATABASE_URL=file:./dev.db"));

    // generated db client imports the driver that was declared
    let client = std::fs::read_to_string(dir.path().join("src/db/index.ts")).unwrap();
    assert!(client.contains("drizzle-orm/better-sqlite3"));
    assert!(client.contains("from \"better-sqlite3\""));
    assert!(!client.contains("from \"postgres\""));
    let schema = std::fs::read_to_string(dir.path().join("src/db/schema.ts")).unwrap();
    assert!(schema.contains("drizzle-orm/sqlite-core"));

    let manifest = ProjectManifest::load(dir.path()).unwrap().unwrap();
    assert_eq!(manifest.name, "storefront");
    assert_eq!(manifest.modules.len(), 7);
    assert!(!manifest.artifacts.is_empty());
    assert!(manifest.generated_at > 0);
}

#[test]
fn invalid_module_config_fails_and_rolls_back() {
    let dir = TempDir::new().unwrap();
    let recipe = Recipe::new("storefront", "nextjs")
        .with_module(Module::new("nextjs", ModuleCategory::Foundation))
        .with_module(
            Module::new("drizzle", ModuleCategory::Database)
                .with_parameter("dialect", serde_json::json!("oracle")),
        );
    let ctx = ExecutionContext::for_recipe(&recipe, dir.path()).with_skip_install(true);

    let report = Orchestrator::new().execute(&recipe, &ctx).unwrap();
    assert_eq!(report.status, ExecutionStatus::FailedAt { index: 1 });
    assert_eq!(report.failure_errors()[0].code, "unknown-dialect");

    // the foundation module's files were rolled back
    assert!(!dir.path().join("package.json").exists());
    assert!(ProjectManifest::load(dir.path()).unwrap().is_none());
}

#[test]
fn category_defaults_resolve_when_module_id_is_blank() {
    let dir = TempDir::new().unwrap();
    let recipe = Recipe::new("minimal", "nextjs")
        .with_module(Module::new("", ModuleCategory::Foundation))
        .with_module(Module::new("", ModuleCategory::Testing));
    let ctx = ExecutionContext::for_recipe(&recipe, dir.path()).with_skip_install(true);

    let report = Orchestrator::new().execute(&recipe, &ctx).unwrap();
    assert!(report.success());
    assert_eq!(report.results[0].plugin_id, "nextjs");
    assert_eq!(report.results[1].plugin_id, "vitest");
    assert!(dir.path().join("vitest.config.ts").exists());
}
