//! Material UI plugin

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct MuiPlugin;

const FILES: &[&str] = &["src/theme.ts", "src/components/theme-registry.tsx"];

impl Plugin for MuiPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "mui",
            name: "Material UI",
            version: "6",
            category: ModuleCategory::Ui,
            description: "MUI theme and app-router registry component",
        }
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let primary = ctx.config_str("primaryColor").unwrap_or("#1976d2").to_string();
        let vars = base_vars(ctx).set("primaryColor", &primary);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("src/theme.ts", THEME, &vars)?;
        writer.render_into("src/components/theme-registry.tsx", REGISTRY, &vars)?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![
                Dependency::runtime("@mui/material", "^6.1.0"),
                Dependency::runtime("@mui/material-nextjs", "^6.1.0"),
                Dependency::runtime("@emotion/react", "^11.13.0"),
                Dependency::runtime("@emotion/styled", "^11.13.0"),
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

const THEME: &str = r#"import { createTheme } from "@mui/material/styles";

export const theme = createTheme({
  palette: {
    primary: {
      main: "{{ primaryColor }}",
    },
  },
});
"#;

const REGISTRY: &str = r#""use client";

import { AppRouterCacheProvider } from "@mui/material-nextjs/v15-appRouter";
import { ThemeProvider } from "@mui/material/styles";
import CssBaseline from "@mui/material/CssBaseline";
import { theme } from "@/theme";

export function ThemeRegistry({ children }: { children: React.ReactNode }) {
  return (
    <AppRouterCacheProvider>
      <ThemeProvider theme={theme}>
        <CssBaseline />
        {children}
      </ThemeProvider>
    </AppRouterCacheProvider>
  );
}
"#;
