mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compact {
            project_dir,
            keep_recent,
            threshold,
            force,
        } => commands::compact::run(project_dir, keep_recent, threshold, force),
        Commands::Status { project_dir } => commands::status::run(project_dir),
        Commands::Version => commands::version::run(),
    }
}
