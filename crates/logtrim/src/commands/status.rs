use std::path::PathBuf;

use logtrim_core::{parse, Status};
use logtrim_store::ProjectPaths;

/// Read-only view of the current log: line count, session count, and the
/// per-status breakdown a compaction digest would report.
pub fn run(project_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let dir = match project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let log_path = ProjectPaths::new(dir).progress_log();
    if !log_path.exists() {
        println!("No progress.log found.");
        return Ok(());
    }

    let raw = std::fs::read_to_string(&log_path)?;
    let records = parse(&raw);

    println!("progress.log: {} lines, {} sessions", raw.lines().count(), records.len());

    if records.is_empty() {
        return Ok(());
    }

    let count = |status: Status| records.iter().filter(|r| r.status == status).count();
    println!("  completed: {}", count(Status::Completed));
    println!("  failed:    {}", count(Status::Failed));
    println!("  blocked:   {}", count(Status::Blocked));
    println!("  unknown:   {}", count(Status::Unknown));

    if let Some(last) = records.last() {
        println!("  last session: [{}] {}", last.timestamp_text, last.feature_id);
    }
    Ok(())
}
