use architech_core::types::{ExecutionReport, ExecutionStatus, Recipe};

/// Per-module outcome lines followed by a one-line summary
pub fn print_report(report: &ExecutionReport) {
    let total = report.results.len();
    for (index, result) in report.results.iter().enumerate() {
        let icon = if result.success { "✅" } else { "❌" };
        println!(
            "{icon} [{}/{}] {}: {} file(s), {} dependenc{} ({:.0?})",
            index + 1,
            total,
            result.plugin_id,
            result.artifacts.len(),
            result.dependencies.len(),
            if result.dependencies.len() == 1 { "y" } else { "ies" },
            result.duration,
        );
        for warning in &result.warnings {
            println!("   ⚠️  {warning}");
        }
        for error in &result.errors {
            println!("   ❗ {error}");
        }
    }

    match report.status {
        ExecutionStatus::Success => println!(
            "\n✨ Generated {} file(s) in {:.2?}",
            report.artifacts.len(),
            report.duration
        ),
        ExecutionStatus::FailedAt { index } => println!(
            "\n💥 Failed at module {} of {}; completed modules were rolled back",
            index + 1,
            total
        ),
    }
}

/// What `create --dry-run` prints instead of touching disk
pub fn print_plan(recipe: &Recipe) {
    println!(
        "Plan for '{}' ({}, {}):",
        recipe.project_name, recipe.framework, recipe.package_manager
    );
    for (index, module) in recipe.modules.iter().enumerate() {
        let id = if module.id.is_empty() { "(default)" } else { &module.id };
        println!("  {}. {:<12} {id}", index + 1, module.category.to_string());
    }
    println!("\nNothing was generated (dry run).");
}
