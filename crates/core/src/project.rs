//! Helpers for the target project's package.json

use crate::error::{Error, Result};
use crate::types::Dependency;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const PACKAGE_JSON: &str = "package.json";

pub fn read_package_json(project_dir: &Path) -> Result<Value> {
    let path = project_dir.join(PACKAGE_JSON);
    let contents = fs::read_to_string(&path)
        .map_err(|e| Error::Other(format!("cannot read {}: {e}", path.display())))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn write_package_json(project_dir: &Path, value: &Value) -> Result<()> {
    let contents = format!("{}\n", serde_json::to_string_pretty(value)?);
    fs::write(project_dir.join(PACKAGE_JSON), contents)?;
    Ok(())
}

/// Project name as recorded in package.json
pub fn package_name(project_dir: &Path) -> Result<String> {
    let value = read_package_json(project_dir)?;
    value["name"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Other("package.json has no \"name\" field".to_string()))
}

/// Merge declared dependencies into package.json without clobbering pins
/// already present (a plugin never downgrades what another plugin wrote)
pub fn merge_dependencies(project_dir: &Path, dependencies: &[Dependency]) -> Result<()> {
    if dependencies.is_empty() {
        return Ok(());
    }

    let mut value = read_package_json(project_dir)?;
    let root = value
        .as_object_mut()
        .ok_or_else(|| Error::Other("package.json is not a JSON object".to_string()))?;

    for dep in dependencies {
        let section = if dep.dev { "devDependencies" } else { "dependencies" };
        let table = root
            .entry(section)
            .or_insert_with(|| Value::Object(Map::new()));
        let table = table
            .as_object_mut()
            .ok_or_else(|| Error::Other(format!("package.json {section} is not an object")))?;
        if !table.contains_key(&dep.name) {
            debug!("Adding {section} entry {}@{}", dep.name, dep.version);
            table.insert(dep.name.clone(), Value::String(dep.version.clone()));
        }
    }

    write_package_json(project_dir, &value)
}
