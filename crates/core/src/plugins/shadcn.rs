//! Shadcn/ui UI plugin

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct ShadcnPlugin;

const FILES: &[&str] = &[
    "components.json",
    "src/lib/utils.ts",
    "tailwind.config.ts",
];

impl Plugin for ShadcnPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "shadcn",
            name: "Shadcn/ui",
            version: "2",
            category: ModuleCategory::Ui,
            description: "Tailwind-based component toolkit configuration",
        }
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let style = ctx.config_str("style").unwrap_or("new-york").to_string();
        let vars = base_vars(ctx).set("style", &style);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("components.json", COMPONENTS_JSON, &vars)?;
        writer.render_into("src/lib/utils.ts", UTILS, &vars)?;
        writer.render_into("tailwind.config.ts", TAILWIND_CONFIG, &vars)?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![
                Dependency::runtime("tailwindcss", "^3.4.0"),
                Dependency::runtime("class-variance-authority", "^0.7.0"),
                Dependency::runtime("clsx", "^2.1.0"),
                Dependency::runtime("tailwind-merge", "^2.5.0"),
                Dependency::runtime("lucide-react", "^0.460.0"),
            ],
            warnings: Vec::new(),
            errors: Vec::new(),
            duration: start.elapsed(),
        })
    }

    fn uninstall(&self, ctx: &PluginContext) -> Result<()> {
        remove_files(&ctx.project_dir, FILES)
    }
}

const COMPONENTS_JSON: &str = r#"{
  "$schema": "https://ui.shadcn.com/schema.json",
  "style": "{{ style }}",
  "rsc": true,
  "tsx": true,
  "tailwind": {
    "config": "tailwind.config.ts",
    "css": "src/app/globals.css",
    "baseColor": "neutral",
    "cssVariables": true
  },
  "aliases": {
    "components": "@/components",
    "utils": "@/lib/utils"
  }
}
"#;

const UTILS: &str = r#"import { clsx, type ClassValue } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

const TAILWIND_CONFIG: &str = r#"import type { Config } from "tailwindcss";

const config: Config = {
  darkMode: ["class"],
  content: ["./src/**/*.{ts,tsx}"],
  theme: {
    extend: {},
  },
  plugins: [],
};

export default config;
"#;
