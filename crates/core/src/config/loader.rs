//! Loads recipes from JSON or TOML files, picked by extension

use crate::error::{Error, Result};
use crate::types::Recipe;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_recipe(path: &Path) -> Result<Recipe> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::RecipeError(format!("cannot read {}: {e}", path.display())))?;

    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let recipe: Recipe = match extension {
        "json" => serde_json::from_str(&contents)
            .map_err(|e| Error::RecipeError(format!("invalid JSON recipe: {e}")))?,
        "toml" => toml::from_str(&contents)
            .map_err(|e| Error::RecipeError(format!("invalid TOML recipe: {e}")))?,
        other => {
            return Err(Error::RecipeError(format!(
                "unsupported recipe format '{other}' (expected .json or .toml)"
            )))
        }
    };

    debug!(
        "Loaded recipe '{}' with {} module(s) from {}",
        recipe.project_name,
        recipe.modules.len(),
        path.display()
    );
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ModuleCategory;
    use std::fs;

    #[test]
    fn loads_json_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.json");
        fs::write(
            &path,
            r#"{
                "project_name": "blog",
                "framework": "nextjs",
                "package_manager": "pnpm",
                "modules": [
                    {"id": "nextjs", "category": "foundation"},
                    {"id": "drizzle", "category": "database", "parameters": {"dialect": "sqlite"}}
                ]
            }"#,
        )
        .unwrap();

        let recipe = load_recipe(&path).unwrap();
        assert_eq!(recipe.project_name, "blog");
        assert_eq!(recipe.modules.len(), 2);
        assert_eq!(recipe.modules[1].category, ModuleCategory::Database);
        assert_eq!(recipe.modules[1].parameter_str("dialect"), Some("sqlite"));
    }

    #[test]
    fn loads_toml_recipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.toml");
        fs::write(
            &path,
            r#"
project_name = "shop"
framework = "nextjs"

[[modules]]
id = "nextjs"
category = "foundation"

[[modules]]
id = "vitest"
category = "testing"
"#,
        )
        .unwrap();

        let recipe = load_recipe(&path).unwrap();
        assert_eq!(recipe.project_name, "shop");
        assert_eq!(recipe.modules[1].id, "vitest");
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipe.yaml");
        fs::write(&path, "project_name: nope").unwrap();
        assert!(load_recipe(&path).is_err());
    }
}
