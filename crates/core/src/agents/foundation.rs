//! Foundation agent: scaffolds the framework skeleton everything else
//! layers onto, so it must be the first module in a recipe.

use super::Agent;
use crate::types::ModuleCategory;

pub struct FoundationAgent;

impl Agent for FoundationAgent {
    fn category(&self) -> ModuleCategory {
        ModuleCategory::Foundation
    }

    fn default_plugin(&self) -> &'static str {
        "nextjs"
    }
}
