//! Recipe and module types
//!
//! A recipe is the declarative description of what to generate: the project
//! name, the framework, and an ordered list of modules. It is built from CLI
//! flags or loaded from a recipe file, and is immutable during a run.

use crate::package_manager::PackageManager;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The declarative list of modules describing what to generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Project name, used as the target directory name and package name
    pub project_name: String,

    /// Framework the foundation module scaffolds (e.g. "nextjs")
    pub framework: String,

    /// Package manager used for dependency installation
    #[serde(default)]
    pub package_manager: PackageManager,

    /// Ordered list of modules; executed strictly in this order
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Recipe {
    pub fn new(project_name: impl Into<String>, framework: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            framework: framework.into(),
            package_manager: PackageManager::default(),
            modules: Vec::new(),
        }
    }

    pub fn with_module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }
}

/// One recipe entry specifying a concern and its parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Plugin id (e.g. "drizzle"); empty means the category default
    #[serde(default)]
    pub id: String,

    /// Concern this module belongs to
    pub category: ModuleCategory,

    /// Requested plugin version, if pinned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Plugin-specific parameters, passed through verbatim
    #[serde(default)]
    pub parameters: serde_json::Map<String, serde_json::Value>,

    /// Feature flags consumed by the plugin
    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub features: std::collections::BTreeMap<String, bool>,
}

impl Module {
    pub fn new(id: impl Into<String>, category: ModuleCategory) -> Self {
        Self {
            id: id.into(),
            category,
            version: None,
            parameters: serde_json::Map::new(),
            features: std::collections::BTreeMap::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// String parameter lookup; non-string values are ignored
    pub fn parameter_str(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).and_then(|v| v.as_str())
    }
}

/// The seven concerns an agent can own
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Foundation,
    Database,
    Auth,
    Ui,
    Deployment,
    Monitoring,
    Testing,
}

impl ModuleCategory {
    pub const ALL: [ModuleCategory; 7] = [
        ModuleCategory::Foundation,
        ModuleCategory::Database,
        ModuleCategory::Auth,
        ModuleCategory::Ui,
        ModuleCategory::Deployment,
        ModuleCategory::Monitoring,
        ModuleCategory::Testing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleCategory::Foundation => "foundation",
            ModuleCategory::Database => "database",
            ModuleCategory::Auth => "auth",
            ModuleCategory::Ui => "ui",
            ModuleCategory::Deployment => "deployment",
            ModuleCategory::Monitoring => "monitoring",
            ModuleCategory::Testing => "testing",
        }
    }
}

impl fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foundation" => Ok(ModuleCategory::Foundation),
            "database" => Ok(ModuleCategory::Database),
            "auth" => Ok(ModuleCategory::Auth),
            "ui" => Ok(ModuleCategory::Ui),
            "deployment" => Ok(ModuleCategory::Deployment),
            "monitoring" => Ok(ModuleCategory::Monitoring),
            "testing" => Ok(ModuleCategory::Testing),
            other => Err(format!("unknown module category '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in ModuleCategory::ALL {
            assert_eq!(category.as_str().parse::<ModuleCategory>(), Ok(category));
        }
    }

    #[test]
    fn module_defaults_deserialize() {
        let module: Module = serde_json::from_str(r#"{"category": "database"}"#).unwrap();
        assert_eq!(module.id, "");
        assert_eq!(module.category, ModuleCategory::Database);
        assert!(module.parameters.is_empty());
        assert!(module.features.is_empty());
    }
}
