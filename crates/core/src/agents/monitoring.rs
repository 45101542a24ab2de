use super::Agent;
use crate::types::{Diagnostic, Module, ModuleCategory};

pub struct MonitoringAgent;

impl Agent for MonitoringAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Monitoring
    }

    fn default_plugin(&self) -> &'static str {
        "google-analytics"
    }

    fn validate_module(&self, module: &Module) -> Vec<Diagnostic> {
        if module.parameter_str("measurementId").is_none() {
            vec![Diagnostic::warning(
                "placeholder-measurement-id",
                "no measurementId parameter given, a placeholder id will be generated",
            )]
        } else {
            Vec::new()
        }
    }
}
