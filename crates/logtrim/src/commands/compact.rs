use std::path::PathBuf;

use logtrim_store::{compact, CompactOptions, Outcome};

pub fn run(
    project_dir: Option<PathBuf>,
    keep_recent: usize,
    threshold: usize,
    force: bool,
) -> anyhow::Result<()> {
    let dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut opts = CompactOptions::new(dir);
    opts.keep_recent = keep_recent;
    opts.threshold_lines = threshold;
    opts.force = force;

    match compact(&opts)? {
        Outcome::SkippedNoSource => {
            println!("No progress.log found. Nothing to compact.");
        }
        Outcome::SkippedBelowThreshold { lines, threshold } => {
            println!("progress.log has {lines} lines (threshold: {threshold}). No compaction needed.");
        }
        Outcome::SkippedUnparsable => {
            println!("No valid sessions found in progress.log. Skipping compaction.");
        }
        Outcome::Completed {
            archive_path,
            digest_path,
            retained,
        } => {
            println!("Compaction complete.");
            println!("  Archived original to {}", archive_path.display());
            println!("  Wrote digest to {}", digest_path.display());
            println!("  Retained {retained} recent sessions in progress.log");
        }
    }
    Ok(())
}
