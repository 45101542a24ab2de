//! Integration tests for the sequential execution contract

use architech_core::error::{Error, Result};
use architech_core::plugin::{Plugin, PluginMetadata};
use architech_core::types::{
    Diagnostic, ExecutionContext, ExecutionStatus, Module, ModuleCategory, PluginContext,
    PluginResult, ProjectManifest, Recipe,
};
use architech_core::{Orchestrator, PluginRegistry};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Test plugin that records install/uninstall calls into a shared log
struct RecordingPlugin {
    id: &'static str,
    category: ModuleCategory,
    fail_install: bool,
    fail_uninstall: bool,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlugin {
    fn new(id: &'static str, category: ModuleCategory, log: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            id,
            category,
            fail_install: false,
            fail_uninstall: false,
            log,
        }
    }
}

impl Plugin for RecordingPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: self.id,
            name: self.id,
            version: "0",
            category: self.category,
            description: "test plugin",
        }
    }

    fn install(&self, _ctx: &PluginContext) -> Result<PluginResult> {
        self.log.lock().unwrap().push(format!("install:{}", self.id));
        if self.fail_install {
            return Ok(PluginResult::failure(
                vec![Diagnostic::error("boom", "install blew up")],
                Duration::ZERO,
            ));
        }
        Ok(PluginResult {
            success: true,
            ..Default::default()
        })
    }

    fn uninstall(&self, _ctx: &PluginContext) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("uninstall:{}", self.id));
        if self.fail_uninstall {
            return Err(Error::Other("uninstall blew up".to_string()));
        }
        Ok(())
    }
}

struct Harness {
    orchestrator: Orchestrator,
    log: Arc<Mutex<Vec<String>>>,
    _dir: TempDir,
    ctx: ExecutionContext,
    recipe: Recipe,
}

fn harness(configure: impl FnOnce(&mut RecordingPlugin, &mut RecordingPlugin, &mut RecordingPlugin)) -> Harness {
    let log = Arc::new(Mutex::new(Vec::new()));
    let mut foundation =
        RecordingPlugin::new("stub-foundation", ModuleCategory::Foundation, log.clone());
    let mut auth = RecordingPlugin::new("stub-auth", ModuleCategory::Auth, log.clone());
    let mut database = RecordingPlugin::new("stub-db", ModuleCategory::Database, log.clone());
    configure(&mut foundation, &mut auth, &mut database);

    let mut registry = PluginRegistry::new();
    registry.register(Arc::new(foundation));
    registry.register(Arc::new(auth));
    registry.register(Arc::new(database));

    let recipe = Recipe::new("demo", "nextjs")
        .with_module(Module::new("stub-foundation", ModuleCategory::Foundation))
        .with_module(Module::new("stub-auth", ModuleCategory::Auth))
        .with_module(Module::new("stub-db", ModuleCategory::Database));

    let dir = TempDir::new().unwrap();
    let ctx = ExecutionContext::for_recipe(&recipe, dir.path()).with_skip_install(true);

    Harness {
        orchestrator: Orchestrator::with_registry(registry),
        log,
        _dir: dir,
        ctx,
        recipe,
    }
}

#[test]
fn all_modules_run_in_order_on_success() {
    let h = harness(|_, _, _| {});
    let report = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap();

    assert_eq!(report.status, ExecutionStatus::Success);
    assert_eq!(report.results.len(), 3);
    assert_eq!(
        *h.log.lock().unwrap(),
        vec!["install:stub-foundation", "install:stub-auth", "install:stub-db"]
    );
}

#[test]
fn failure_at_k_stops_all_later_modules() {
    let h = harness(|_, auth, _| auth.fail_install = true);
    let report = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap();

    assert_eq!(report.status, ExecutionStatus::FailedAt { index: 1 });
    // stub-db (index 2) never ran
    let log = h.log.lock().unwrap();
    assert!(!log.iter().any(|entry| entry == "install:stub-db"));
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.failure_errors()[0].code, "boom");
}

#[test]
fn rollback_covers_every_completed_module_in_reverse() {
    let h = harness(|_, _, database| database.fail_install = true);
    let report = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap();

    assert_eq!(report.status, ExecutionStatus::FailedAt { index: 2 });
    assert_eq!(
        *h.log.lock().unwrap(),
        vec![
            "install:stub-foundation",
            "install:stub-auth",
            "install:stub-db",
            "uninstall:stub-auth",
            "uninstall:stub-foundation",
        ]
    );
}

#[test]
fn rollback_failures_never_propagate() {
    let h = harness(|foundation, _, database| {
        foundation.fail_uninstall = true;
        database.fail_install = true;
    });

    // Rollback of stub-foundation errors, but execute still returns the report
    let report = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap();
    assert_eq!(report.status, ExecutionStatus::FailedAt { index: 2 });

    let log = h.log.lock().unwrap();
    assert!(log.iter().any(|entry| entry == "uninstall:stub-foundation"));
}

#[test]
fn manifest_reflects_recipe_verbatim_on_success() {
    let h = harness(|_, _, _| {});
    let report = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap();
    assert!(report.success());

    let manifest = ProjectManifest::load(&h.ctx.project_dir).unwrap().unwrap();
    assert_eq!(manifest.name, h.recipe.project_name);
    assert_eq!(manifest.modules.len(), h.recipe.modules.len());
    for (written, expected) in manifest.modules.iter().zip(&h.recipe.modules) {
        assert_eq!(written.id, expected.id);
        assert_eq!(written.category, expected.category);
    }
}

#[test]
fn no_manifest_is_written_on_failure() {
    let h = harness(|_, auth, _| auth.fail_install = true);
    let report = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap();
    assert!(!report.success());
    assert!(ProjectManifest::load(&h.ctx.project_dir).unwrap().is_none());
}

#[test]
fn empty_project_name_aborts_before_any_module_runs() {
    let mut h = harness(|_, _, _| {});
    h.recipe.project_name = String::new();

    let err = h.orchestrator.execute(&h.recipe, &h.ctx).unwrap_err();
    assert!(err.to_string().contains("project name"));
    assert!(h.log.lock().unwrap().is_empty());
}

#[test]
fn unknown_plugin_id_is_an_execution_failure() {
    let h = harness(|_, _, _| {});
    let recipe = Recipe::new("demo", "nextjs")
        .with_module(Module::new("stub-foundation", ModuleCategory::Foundation))
        .with_module(Module::new("no-such-plugin", ModuleCategory::Database));

    let report = h.orchestrator.execute(&recipe, &h.ctx).unwrap();
    assert_eq!(report.status, ExecutionStatus::FailedAt { index: 1 });
    assert_eq!(report.failure_errors()[0].code, "plugin-not-found");
    // the completed foundation module was rolled back
    assert!(h
        .log
        .lock()
        .unwrap()
        .iter()
        .any(|entry| entry == "uninstall:stub-foundation"));
}
