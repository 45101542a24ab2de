//! Next.js foundation plugin
//!
//! Lays down the framework skeleton every other plugin builds on:
//! package.json, tsconfig, next.config, the app shell, and a starter .env.

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, Diagnostic, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct NextjsPlugin;

const FILES: &[&str] = &[
    "package.json",
    "tsconfig.json",
    "next.config.mjs",
    ".gitignore",
    ".env",
    "src/app/layout.tsx",
    "src/app/page.tsx",
    "src/app/globals.css",
];

impl Plugin for NextjsPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "nextjs",
            name: "Next.js",
            version: "15",
            category: ModuleCategory::Foundation,
            description: "Next.js app-router project skeleton with TypeScript",
        }
    }

    fn validate(&self, ctx: &PluginContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if ctx.project_name.is_empty() {
            diagnostics.push(Diagnostic::error(
                "empty-project-name",
                "project name must not be empty",
            ));
        } else if !ctx
            .project_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            diagnostics.push(Diagnostic::error(
                "invalid-project-name",
                format!("'{}' is not a valid npm package name", ctx.project_name),
            ));
        }
        diagnostics
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let vars = base_vars(ctx);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("package.json", PACKAGE_JSON, &vars)?;
        writer.render_into("tsconfig.json", TSCONFIG, &vars)?;
        writer.render_into("next.config.mjs", NEXT_CONFIG, &vars)?;
        writer.render_into(".gitignore", GITIGNORE, &vars)?;
        writer.render_into(".env", ENV_FILE, &vars)?;
        writer.render_into("src/app/layout.tsx", LAYOUT, &vars)?;
        writer.render_into("src/app/page.tsx", PAGE, &vars)?;
        writer.render_into("src/app/globals.css", GLOBALS_CSS, &vars)?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![
                Dependency::runtime("next", "^15.1.0"),
                Dependency::runtime("react", "^19.0.0"),
                Dependency::runtime("react-dom", "^19.0.0"),
                Dependency::dev("typescript", "^5.7.0"),
                Dependency::dev("@types/node", "^22.0.0"),
                Dependency::dev("@types/react", "^19.0.0"),
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

const PACKAGE_JSON: &str = r#"{
  "name": "{{ projectName }}",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint"
  },
  "dependencies": {},
  "devDependencies": {}
}
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "plugins": [{ "name": "next" }],
    "paths": { "@/*": ["./src/*"] }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx", ".next/types/**/*.ts"],
  "exclude": ["node_modules"]
}
"#;

const NEXT_CONFIG: &str = r#"/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
};

export default nextConfig;
"#;

const GITIGNORE: &str = r#"node_modules/
.next/
out/
build/
.env*.local
*.tsbuildinfo
next-env.d.ts
"#;

const ENV_FILE: &str = r#"# Environment for {{ projectName }}
NODE_ENV=development
"#;

const LAYOUT: &str = r#"import type { Metadata } from "next";
import "./globals.css";

export const metadata: Metadata = {
  title: "{{ projectName }}",
  description: "Generated by architech",
};

export default function RootLayout({
  children,
}: Readonly<{ children: React.ReactNode }>) {
  return (
    <html lang="en">
      <body>{children}</body>
    </html>
  );
}
"#;

const PAGE: &str = r#"export default function Home() {
  return (
    <main>
      <h1>{{ projectName }}</h1>
      <p>Scaffolded with architech.</p>
    </main>
  );
}
"#;

const GLOBALS_CSS: &str = r#":root {
  --background: #ffffff;
  --foreground: #171717;
}

body {
  color: var(--foreground);
  background: var(--background);
  font-family: system-ui, sans-serif;
}
"#;
