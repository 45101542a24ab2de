//! Better Auth authentication plugin

use super::base_vars;
use crate::error::Result;
use crate::plugin::{Plugin, PluginMetadata};
use crate::template::{remove_files, ArtifactWriter};
use crate::types::{Dependency, Diagnostic, ModuleCategory, PluginContext, PluginResult};
use std::time::Instant;

pub struct BetterAuthPlugin;

const FILES: &[&str] = &[
    "src/lib/auth.ts",
    "src/lib/auth-client.ts",
    "src/app/api/auth/[...all]/route.ts",
];

impl Plugin for BetterAuthPlugin {
    fn metadata(&self) -> PluginMetadata {
        PluginMetadata {
            id: "better-auth",
            name: "Better Auth",
            version: "1",
            category: ModuleCategory::Auth,
            description: "Email/password and social auth with session handling",
        }
    }

    fn validate(&self, ctx: &PluginContext) -> Vec<Diagnostic> {
        // Social providers are opt-in via features; warn on unknown names
        const KNOWN: &[&str] = &["google", "github", "discord"];
        ctx.features
            .keys()
            .filter(|name| !KNOWN.contains(&name.as_str()))
            .map(|name| {
                Diagnostic::warning(
                    "unknown-auth-provider",
                    format!("ignoring unknown auth provider feature '{name}'"),
                )
            })
            .collect()
    }

    fn install(&self, ctx: &PluginContext) -> Result<PluginResult> {
        let start = Instant::now();
        let vars = base_vars(ctx);

        let mut writer = ArtifactWriter::new(&ctx.project_dir);
        writer.render_into("src/lib/auth.ts", AUTH_CONFIG, &vars)?;
        writer.render_into("src/lib/auth-client.ts", AUTH_CLIENT, &vars)?;
        writer.render_into("src/app/api/auth/[...all]/route.ts", ROUTE_HANDLER, &vars)?;
        writer.append(
            ".env",
            "BETTER_AUTH_SECRET=change-me\nBETTER_AUTH_URL=http://localhost:3000",
        )?;

        Ok(PluginResult {
            success: true,
            artifacts: writer.into_artifacts(),
            dependencies: vec![Dependency::runtime("better-auth", "^1.0.0")],
            warnings: Vec::new(),
            errors: Vec::new(),
            duration: start.elapsed(),
        })
    }

    fn uninstall(&self, ctx: &PluginContext) -> Result<()> {
        remove_files(&ctx.project_dir, FILES)
    }
}

const AUTH_CONFIG: &str = r#"import { betterAuth } from "better-auth";

export const auth = betterAuth({
  emailAndPassword: {
    enabled: true,
  },
});
"#;

const AUTH_CLIENT: &str = r#"import { createAuthClient } from "better-auth/react";

export const authClient = createAuthClient({
  baseURL: process.env.BETTER_AUTH_URL,
});

export const { signIn, signUp, signOut, useSession } = authClient;
"#;

const ROUTE_HANDLER: &str = r#"import { auth } from "@/lib/auth";
import { toNextJsHandler } from "better-auth/next-js";

export const { GET, POST } = toNextJsHandler(auth.handler);
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ExecutionContext, Module, Recipe};

    #[test]
    fn warns_on_unknown_provider_feature() {
        let dir = tempfile::tempdir().unwrap();
        let mut module = Module::new("better-auth", ModuleCategory::Auth);
        module.features.insert("github".to_string(), true);
        module.features.insert("myspace".to_string(), true);

        let recipe = Recipe::new("demo", "nextjs");
        let ctx = ExecutionContext::for_recipe(&recipe, dir.path());
        let pctx = PluginContext::for_module(&ctx, "better-auth", &module);

        let diagnostics = BetterAuthPlugin.validate(&pctx);
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].is_error());
        assert!(diagnostics[0].message.contains("myspace"));
    }
}
