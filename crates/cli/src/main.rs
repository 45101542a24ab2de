use anyhow::Result;
use clap::Parser;

use architech::cli::{Cli, Commands};
use architech::commands::{add_command, create_command, list_command, scale_command, CreateArgs};

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Create {
            name,
            framework,
            database,
            auth,
            ui,
            monitoring,
            testing,
            deployment,
            recipe,
            package_manager,
            path,
            no_install,
            dry_run,
        } => create_command(CreateArgs {
            name,
            framework,
            database,
            auth,
            ui,
            monitoring,
            testing,
            deployment,
            recipe,
            package_manager,
            path,
            no_install,
            dry_run,
        }),
        Commands::Add {
            module,
            category,
            path,
            no_install,
        } => add_command(&module, category.as_deref(), path.as_deref(), no_install),
        Commands::List => list_command(),
        Commands::ScaleToMonorepo { path, force } => scale_command(path.as_deref(), force),
    }
}
