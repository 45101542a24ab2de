//! Template rendering and artifact writing
//!
//! Templates are static string constants with `{{ name }}` placeholders.
//! Rendering substitutes from a flat variable map; an unresolved placeholder
//! is an error naming the variable, so broken templates fail loudly instead
//! of generating half-filled files.

use crate::error::{Error, Result};
use crate::types::Artifact;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap())
}

/// Flat variable map for template substitution
#[derive(Debug, Clone, Default)]
pub struct TemplateVars(BTreeMap<String, String>);

impl TemplateVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Render a template, substituting every `{{ name }}` placeholder
pub fn render(template: &str, vars: &TemplateVars) -> Result<String> {
    let mut missing: Option<String> = None;
    let rendered = placeholder_re().replace_all(template, |caps: &regex::Captures<'_>| {
        let name = &caps[1];
        match vars.get(name) {
            Some(value) => value.to_string(),
            None => {
                if missing.is_none() {
                    missing = Some(name.to_string());
                }
                String::new()
            }
        }
    });

    if let Some(name) = missing {
        return Err(Error::TemplateError(format!(
            "unresolved template variable '{name}'"
        )));
    }
    Ok(rendered.into_owned())
}

/// Writes rendered files into the project directory and records artifacts
pub struct ArtifactWriter {
    project_dir: PathBuf,
    artifacts: Vec<Artifact>,
}

impl ArtifactWriter {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            artifacts: Vec::new(),
        }
    }

    /// Write `contents` to `relative` under the project root, creating parent
    /// directories as needed
    pub fn write(&mut self, relative: &str, contents: &str) -> Result<()> {
        let target = self.project_dir.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, contents)?;
        debug!("Generated {}", target.display());

        self.artifacts.push(Artifact {
            path: PathBuf::from(relative),
            checksum: format!("{:x}", md5::compute(contents.as_bytes())),
        });
        Ok(())
    }

    /// Render then write in one step
    pub fn render_into(&mut self, relative: &str, template: &str, vars: &TemplateVars) -> Result<()> {
        let contents = render(template, vars)?;
        self.write(relative, &contents)
    }

    /// Deep-merge `patch` into an existing JSON file (object keys merge
    /// recursively, everything else is replaced); creates the file when absent
    pub fn merge_json(&mut self, relative: &str, patch: serde_json::Value) -> Result<()> {
        let target = self.project_dir.join(relative);
        let mut current = if target.exists() {
            serde_json::from_str(&fs::read_to_string(&target)?)?
        } else {
            serde_json::Value::Object(serde_json::Map::new())
        };
        merge_values(&mut current, patch);
        let contents = format!("{}\n", serde_json::to_string_pretty(&current)?);
        self.write(relative, &contents)
    }

    /// Append lines to a file (used for .env and .gitignore wiring)
    pub fn append(&mut self, relative: &str, lines: &str) -> Result<()> {
        let target = self.project_dir.join(relative);
        let mut contents = if target.exists() {
            fs::read_to_string(&target)?
        } else {
            String::new()
        };
        if !contents.is_empty() && !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push_str(lines);
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        self.write(relative, &contents)
    }

    pub fn into_artifacts(self) -> Vec<Artifact> {
        self.artifacts
    }
}

fn merge_values(current: &mut serde_json::Value, patch: serde_json::Value) {
    match (current, patch) {
        (serde_json::Value::Object(cur), serde_json::Value::Object(new)) => {
            for (key, value) in new {
                merge_values(cur.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (current, patch) => *current = patch,
    }
}

/// Best-effort removal of previously generated files; missing files are fine
pub fn remove_files(project_dir: &Path, relative_paths: &[&str]) -> Result<()> {
    for relative in relative_paths {
        let target = project_dir.join(relative);
        if target.exists() {
            fs::remove_file(&target)?;
            debug!("Removed {}", target.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_placeholders() {
        let vars = TemplateVars::new().set("projectName", "demo");
        let out = render("name: {{ projectName }} ({{projectName}})", &vars).unwrap();
        assert_eq!(out, "name: demo (demo)");
    }

    #[test]
    fn unresolved_placeholder_is_an_error() {
        let err = render("{{ missing }}", &TemplateVars::new()).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn merge_json_merges_nested_objects() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ArtifactWriter::new(dir.path());
        writer
            .merge_json(
                "package.json",
                serde_json::json!({"scripts": {"dev": "next dev"}}),
            )
            .unwrap();
        writer
            .merge_json(
                "package.json",
                serde_json::json!({"scripts": {"test": "vitest"}}),
            )
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join("package.json")).unwrap())
                .unwrap();
        assert_eq!(value["scripts"]["dev"], "next dev");
        assert_eq!(value["scripts"]["test"], "vitest");
    }

    #[test]
    fn writer_records_checksummed_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ArtifactWriter::new(dir.path());
        writer.write("src/index.ts", "export {};\n").unwrap();

        let artifacts = writer.into_artifacts();
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, std::path::PathBuf::from("src/index.ts"));
        assert_eq!(artifacts[0].checksum.len(), 32);
    }
}
