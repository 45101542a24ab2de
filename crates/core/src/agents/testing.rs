use super::Agent;
use crate::types::ModuleCategory;

pub struct TestingAgent;

impl Agent for TestingAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Testing
    }

    fn default_plugin(&self) -> &'static str {
        "vitest"
    }
}
