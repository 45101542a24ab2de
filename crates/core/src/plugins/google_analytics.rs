//! Google Analytics monitoring plugin

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, Diagnostic, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct GoogleAnalyticsPlugin;

const FILES: &[&str] = &["src/components/analytics.tsx"];

impl Plugin for GoogleAnalyticsPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "google-analytics",
            name: "Google Analytics",
            version: "4",
            category: ModuleCategory::Monitoring,
            description: "GA4 measurement via @next/third-parties",
        }
    }

    fn validate(&self, ctx: &PluginContext) -> Vec<Diagnostic> {
        match ctx.config_str("measurementId") {
            Some(id) if !id.starts_with("G-") => vec![Diagnostic::warning(
                "suspicious-measurement-id",
                format!("measurement id '{id}' does not look like a GA4 id (G-...)"),
            )],
            _ => Vec::new(),
        }
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let measurement_id = ctx
            .config_str("measurementId")
            .unwrap_or("G-XXXXXXXXXX")
            .to_string();
        let vars = base_vars(ctx).set("measurementId", &measurement_id);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("src/components/analytics.tsx", ANALYTICS, &vars)?;
        writer.append(
            ".env",
            &format!("NEXT_PUBLIC_GA_MEASUREMENT_ID={measurement_id}"),
        )?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![Dependency::runtime("@next/third-parties", "^15.1.0")],
            warnings: Vec::new(),
            errors: Vec::new(),
            duration: start.elapsed(),
        })
    }

    fn uninstall(&self, ctx: &PluginContext) -> Result<()> {
        remove_files(&ctx.project_dir, FILES)
    }
}

const ANALYTICS: &str = r#"import { GoogleAnalytics } from "@next/third-parties/google";

export function Analytics() {
  const id = process.env.NEXT_PUBLIC_GA_MEASUREMENT_ID;
  if (!id) return null;
  return <GoogleAnalytics gaId={id} />;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExecutionContext, Module, Recipe};

    #[test]
    fn warns_on_suspicious_measurement_id() {
        let dir = tempfile::tempdir().unwrap();
        let module = Module::new("google-analytics", ModuleCategory::Monitoring)
            .with_parameter("measurementId", serde_json::json!("UA-12345"));
        let recipe = Recipe::new("demo", "nextjs");
        let ctx = ExecutionContext::for_recipe(&recipe, dir.path());
        let pctx = PluginContext::for_module(&ctx, "google-analytics", &module);

        let diagnostics = GoogleAnalyticsPlugin.validate(&pctx);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "suspicious-measurement-id");
    }
}
