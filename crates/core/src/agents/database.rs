use super::Agent;
use crate::types::{Diagnostic, Module, ModuleCategory};

pub struct DatabaseAgent;

impl Agent for DatabaseAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Database
    }

    fn default_plugin(&self) -> &'static str {
        "drizzle"
    }

    fn validate_module(&self, module: &Module) -> Vec<Diagnostic> {
        if module.parameter_str("dialect").is_none() && module.parameter_str("database").is_none() {
            vec![Diagnostic::warning(
                "default-database-config",
                "no dialect or database parameter given, plugin defaults apply",
            )]
        } else {
            Vec::new()
        }
    }
}
