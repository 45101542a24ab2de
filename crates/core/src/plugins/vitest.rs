//! Vitest testing plugin

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct VitestPlugin;

const FILES: &[&str] = &[
    "vitest.config.ts",
    "vitest.setup.ts",
    "src/app/page.test.tsx",
];

impl Plugin for VitestPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "vitest",
            name: "Vitest",
            version: "2",
            category: ModuleCategory::Testing,
            description: "Vitest with jsdom and Testing Library setup",
        }
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let vars = base_vars(ctx);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("vitest.config.ts", VITEST_CONFIG, &vars)?;
        writer.render_into("vitest.setup.ts", VITEST_SETUP, &vars)?;
        writer.render_into("src/app/page.test.tsx", SAMPLE_TEST, &vars)?;
        writer.merge_json(
            "package.json",
            serde_json::json!({
                "scripts": {
                    "test": "vitest run",
                    "test:watch": "vitest"
                }
            }),
        )?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![
                Dependency::dev("vitest", "^2.1.0"),
                Dependency::dev("@vitejs/plugin-react", "^4.3.0"),
                Dependency::dev("jsdom", "^25.0.0"),
                Dependency::dev("@testing-library/react", "^16.0.0"),
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

const VITEST_CONFIG: &str = r#"import { defineConfig } from "vitest/config";
import react from "@vitejs/plugin-react";
import path from "node:path";

export default defineConfig({
  plugins: [react()],
  test: {
    environment: "jsdom",
    setupFiles: ["./vitest.setup.ts"],
  },
  resolve: {
    alias: {
      "@": path.resolve(__dirname, "./src"),
    },
  },
});
"#;

const VITEST_SETUP: &str = r#"import "@testing-library/jest-dom/vitest";
"#;

const SAMPLE_TEST: &str = r#"import { render, screen } from "@testing-library/react";
import { describe, expect, it } from "vitest";
import Home from "./page";

describe("Home", () => {
  it("renders the project name", () => {
    render(<Home />);
    expect(screen.getByText("{{ projectName }}")).toBeInTheDocument();
  });
});
"#;
