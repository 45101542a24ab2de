use super::Agent;
use crate::types::ModuleCategory;

pub struct AuthAgent;

impl Agent for AuthAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Auth
    }

    fn default_plugin(&self) -> &'static str {
        "better-auth"
    }
}
