use super::Agent;
use crate::types::{Diagnostic, Module, ModuleCategory};

pub struct DeploymentAgent;

impl Agent for DeploymentAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Deployment
    }

    fn default_plugin(&self) -> &'static str {
        "docker"
    }

    fn validate_module(&self, module: &Module) -> Vec<Diagnostic> {
        match module.parameter_str("port") {
            Some(port) if port.parse::<u16>().is_err() => vec![Diagnostic::error(
                "invalid-port",
                format!("'{port}' is not a valid port number"),
            )],
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_numeric_port() {
        let module = Module::new("docker", ModuleCategory::Deployment)
            .with_parameter("port", serde_json::json!("eighty"));
        let diagnostics = DeploymentAgent.validate_module(&module);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is_error());
    }
}
