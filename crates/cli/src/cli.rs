use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "architech")]
#[command(version, about = "Scaffold full-stack web applications", long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project from flags or a recipe file
    #[command(visible_alias = "c")]
    Create {
        /// Project name, used as the target directory
        name: String,

        /// Foundation framework
        #[arg(long, default_value = "nextjs")]
        framework: String,

        /// Database plugin (e.g. drizzle, mongoose)
        #[arg(long)]
        database: Option<String>,

        /// Auth plugin (e.g. better-auth)
        #[arg(long)]
        auth: Option<String>,

        /// UI plugin (e.g. shadcn, mui)
        #[arg(long)]
        ui: Option<String>,

        /// Monitoring plugin (e.g. google-analytics)
        #[arg(long)]
        monitoring: Option<String>,

        /// Testing plugin (e.g. vitest)
        #[arg(long)]
        testing: Option<String>,

        /// Deployment plugin (e.g. docker)
        #[arg(long)]
        deployment: Option<String>,

        /// Recipe file (.json or .toml); module flags are ignored when set
        #[arg(long)]
        recipe: Option<PathBuf>,

        /// Package manager for dependency installation
        #[arg(long, default_value = "npm")]
        package_manager: String,

        /// Parent directory for the new project (defaults to cwd)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Merge dependencies into package.json but skip installation
        #[arg(long)]
        no_install: bool,

        /// Print the planned modules without generating anything
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Add a module to an existing project
    Add {
        /// Plugin id (e.g. vitest)
        module: String,

        /// Module category; inferred from the plugin when omitted
        #[arg(long)]
        category: Option<String>,

        /// Project directory (defaults to cwd)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Merge dependencies into package.json but skip installation
        #[arg(long)]
        no_install: bool,
    },
    /// List available plugins by category
    #[command(visible_alias = "ls")]
    List,
    /// Restructure a single-app project into a monorepo
    #[command(name = "scale-to-monorepo")]
    ScaleToMonorepo {
        /// Project directory (defaults to cwd)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Proceed even if an apps/ directory already exists
        #[arg(short, long)]
        force: bool,
    },
}
