//! Mongoose (MongoDB ODM) database plugin

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct MongoosePlugin;

const FILES: &[&str] = &["src/db/mongoose.ts", "src/models/user.ts"];

impl Plugin for MongoosePlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "mongoose",
            name: "Mongoose",
            version: "8",
            category: ModuleCategory::Database,
            description: "MongoDB object modeling with cached connections",
        }
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let database = ctx
            .config_str("database")
            .unwrap_or(&ctx.project_name)
            .to_string();
        let vars = base_vars(ctx).set("database", &database);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("src/db/mongoose.ts", CONNECTION, &vars)?;
        writer.render_into("src/models/user.ts", USER_MODEL, &vars)?;
        writer.append(
            ".env",
            &format!("MONGODB_URI=mongodb://localhost:27017/{database}"),
        )?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![Dependency::runtime("mongoose", "^8.8.0")],
            warnings: Vec::new(),
            errors: Vec::new(),
            duration: start.elapsed(),
        })
    }

    fn uninstall(&self, ctx: &PluginContext) -> Result<()> {
        remove_files(&ctx.project_dir, FILES)
    }
}

const CONNECTION: &str = r#"import mongoose from "mongoose";

const MONGODB_URI = process.env.MONGODB_URI!;

let cached = (global as any).mongoose ?? { conn: null, promise: null };
(global as any).mongoose = cached;

export async function connect() {
  if (cached.conn) return cached.conn;
  if (!cached.promise) {
    cached.promise = mongoose.connect(MONGODB_URI);
  }
  cached.conn = await cached.promise;
  return cached.conn;
}
"#;

const USER_MODEL: &str = r#"import mongoose, { Schema } from "mongoose";

const userSchema = new Schema(
  {
    email: { type: String, required: true, unique: true },
    name: String,
  },
  { timestamps: true }
);

export const User = mongoose.models.User ?? mongoose.model("User", userSchema);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExecutionContext, Module, Recipe};

    #[test]
    fn env_uses_database_parameter() {
        let dir = tempfile::tempdir().unwrap();
        let module = Module::new("mongoose", ModuleCategory::Database)
            .with_parameter("database", serde_json::json!("blog"));
        let recipe = Recipe::new("demo", "nextjs");
        let ctx = ExecutionContext::for_recipe(&recipe, dir.path());
        let pctx = PluginContext::for_module(&ctx, "mongoose", &module);

        let result = MongoosePlugin.install(&pctx).unwrap();
        assert!(result.success);

        let env = std::fs::read_to_string(dir.path().join(".env")).unwrap();
        assert!(env.contains("mongodb://localhost:27017/blog"));
    }
}
