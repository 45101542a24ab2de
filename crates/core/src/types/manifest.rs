//! The `.architech.json` manifest
//!
//! Written at the end of a successful run. Purely descriptive: nothing reads
//! it back for correctness, but `scale-to-monorepo` updates the structure
//! field when it restructures a project.

use super::{Artifact, Module};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const MANIFEST_FILE: &str = ".architech.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStructure {
    #[serde(rename = "single-app")]
    SingleApp,
    #[serde(rename = "monorepo")]
    Monorepo,
}

impl fmt::Display for ProjectStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStructure::SingleApp => f.write_str("single-app"),
            ProjectStructure::Monorepo => f.write_str("monorepo"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    pub framework: String,
    pub structure: ProjectStructure,
    /// Module list verbatim from the recipe
    pub modules: Vec<Module>,
    pub artifacts: Vec<Artifact>,
    /// Unix timestamp (seconds) of the run that wrote this manifest
    pub generated_at: u64,
}

impl ProjectManifest {
    pub fn new(
        name: impl Into<String>,
        framework: impl Into<String>,
        modules: Vec<Module>,
        artifacts: Vec<Artifact>,
    ) -> Self {
        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            name: name.into(),
            framework: framework.into(),
            structure: ProjectStructure::SingleApp,
            modules,
            artifacts,
            generated_at,
        }
    }

    pub fn path(project_dir: &Path) -> PathBuf {
        project_dir.join(MANIFEST_FILE)
    }

    pub fn write(&self, project_dir: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(project_dir), contents)?;
        Ok(())
    }

    /// Load an existing manifest, if the project has one
    pub fn load(project_dir: &Path) -> Result<Option<Self>> {
        let path = Self::path(project_dir);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }
}
