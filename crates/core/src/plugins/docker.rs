//! Docker deployment plugin
//!
//! Dockerfile, compose file, dockerignore, and a GitHub Actions workflow
//! that builds the image on push.

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct DockerPlugin;

const FILES: &[&str] = &[
    "Dockerfile",
    "docker-compose.yml",
    ".dockerignore",
    ".github/workflows/ci.yml",
];

impl Plugin for DockerPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "docker",
            name: "Docker",
            version: "1",
            category: ModuleCategory::Deployment,
            description: "Multi-stage Dockerfile, compose file, and CI workflow",
        }
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let node_version = ctx.config_str("nodeVersion").unwrap_or("22").to_string();
        let port = ctx.config_str("port").unwrap_or("3000").to_string();
        let vars = base_vars(ctx)
            .set("nodeVersion", &node_version)
            .set("port", &port);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("Dockerfile", DOCKERFILE, &vars)?;
        writer.render_into("docker-compose.yml", COMPOSE, &vars)?;
        writer.render_into(".dockerignore", DOCKERIGNORE, &vars)?;
        writer.render_into(".github/workflows/ci.yml", CI_WORKFLOW, &vars)?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            duration: start.elapsed(),
        })
    }

    fn uninstall(&self, ctx: &PluginContext) -> Result<()> {
        remove_files(&ctx.project_dir, FILES)
    }
}

const DOCKERFILE: &str = r#"FROM node:{{ nodeVersion }}-alpine AS deps
WORKDIR /app
COPY package.json ./
RUN {{ packageManager }} install

FROM node:{{ nodeVersion }}-alpine AS builder
WORKDIR /app
COPY --from=deps /app/node_modules ./node_modules
COPY . .
RUN {{ packageManager }} run build

FROM node:{{ nodeVersion }}-alpine AS runner
WORKDIR /app
ENV NODE_ENV=production
COPY --from=builder /app/.next ./.next
COPY --from=builder /app/node_modules ./node_modules
COPY --from=builder /app/package.json ./package.json
EXPOSE {{ port }}
CMD ["{{ packageManager }}", "run", "start"]
"#;

const COMPOSE: &str = r#"services:
  {{ projectName }}:
    build: .
    ports:
      - "{{ port }}:{{ port }}"
    env_file:
      - .env
"#;

const DOCKERIGNORE: &str = r#"node_modules
.next
.git
*.md
.env*.local
"#;

const CI_WORKFLOW: &str = r#"name: CI

on:
  push:
    branches: [main]
  pull_request:

jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-node@v4
        with:
          node-version: "{{ nodeVersion }}"
      - run: {{ packageManager }} install
      - run: {{ packageManager }} run build
      - name: Build image
        run: docker build -t {{ projectName }} .
"#;
