use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "logtrim")]
#[command(version)]
#[command(about = "Compact append-only progress logs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Archive older sessions and rewrite the log with the recent ones
    Compact {
        /// Project directory containing progress.log (default: current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,

        /// Number of recent sessions to keep verbatim
        #[arg(long, default_value_t = logtrim_store::DEFAULT_KEEP_RECENT)]
        keep_recent: usize,

        /// Line count below which compaction is skipped
        #[arg(long, default_value_t = logtrim_store::DEFAULT_THRESHOLD_LINES)]
        threshold: usize,

        /// Compact regardless of the threshold
        #[arg(long)]
        force: bool,
    },

    /// Show session statistics for the current log without modifying it
    Status {
        /// Project directory containing progress.log (default: current directory)
        #[arg(long)]
        project_dir: Option<PathBuf>,
    },

    /// Print version information
    Version,
}
