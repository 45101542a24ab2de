//! Built-in technology plugins
//!
//! One module per technology. Every plugin renders a static template set,
//! declares its npm dependencies, and can remove its own files on rollback.

mod better_auth;
mod docker;
mod drizzle;
mod google_analytics;
mod mongoose;
mod mui;
mod nextjs;
mod shadcn;
mod vitest;

pub use better_auth::BetterAuthPlugin;
pub use docker::DockerPlugin;
pub use drizzle::DrizzlePlugin;
pub use google_analytics::GoogleAnalyticsPlugin;
pub use mongoose::MongoosePlugin;
pub use mui::MuiPlugin;
pub use nextjs::NextjsPlugin;
pub use shadcn::ShadcnPlugin;
pub use vitest::VitestPlugin;

use crate::plugin::Plugin;
use crate::template::TemplateVars;
use crate::types::PluginContext;
use std::sync::Arc;

/// The full built-in catalog
pub fn builtins() -> Vec<Arc<dyn Plugin>> {
    vec![
        Arc::new(NextjsPlugin),
        Arc::new(DrizzlePlugin),
        Arc::new(MongoosePlugin),
        Arc::new(BetterAuthPlugin),
        Arc::new(ShadcnPlugin),
        Arc::new(MuiPlugin),
        Arc::new(GoogleAnalyticsPlugin),
        Arc::new(VitestPlugin),
        Arc::new(DockerPlugin),
    ]
}

/// Variables every plugin template can rely on
pub(crate) fn base_vars(ctx: &PluginContext) -> TemplateVars {
    TemplateVars::new()
        .set("projectName", &ctx.project_name)
        .set("framework", &ctx.framework)
        .set("packageManager", ctx.package_manager.command())
}
