use anyhow::Result;

use architech_core::agents::builtin_agents;
use architech_core::types::ModuleCategory;
use architech_core::PluginRegistry;

pub fn list_command() -> Result<()> {
    let registry = PluginRegistry::with_builtins();
    let defaults: Vec<(ModuleCategory, &'static str)> = builtin_agents()
        .iter()
        .map(|agent| (agent.category(), agent.default_plugin()))
        .collect();

    println!("Available plugins ({} total):\n", registry.len());
    for category in ModuleCategory::ALL {
        let plugins = registry.for_category(category);
        if plugins.is_empty() {
            continue;
        }
        println!("📦 {category}");
        for plugin in plugins {
            let metadata = plugin.metadata();
            let default_marker = if defaults.contains(&(category, metadata.id)) {
                " (default)"
            } else {
                ""
            };
            println!(
                "   {:<18} {}{default_marker}",
                metadata.id, metadata.description
            );
        }
        println!();
    }
    Ok(())
}
