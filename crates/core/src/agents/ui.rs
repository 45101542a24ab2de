use super::Agent;
use crate::types::ModuleCategory;

pub struct UiAgent;

impl Agent for UiAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Ui
    }

    fn default_plugin(&self) -> &'static str {
        "shadcn"
    }
}
