//! Compaction orchestration
//!
//! The only component with filesystem side effects. Runs the pure pipeline
//! (parse, partition, digest) and then persists the artifact set in a fixed
//! order: archive the untouched original first, write the digest, and only
//! then swap in the rewritten live log. Non-fatal conditions come back as
//! `Outcome` variants; `Err` is reserved for genuine I/O faults.

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use thiserror::Error;

use logtrim_core::{build_digest, parse, partition, SessionRecord};

use crate::io::atomic_write;
use crate::paths::ProjectPaths;

pub const DEFAULT_KEEP_RECENT: usize = 10;
pub const DEFAULT_THRESHOLD_LINES: usize = 1000;

/// Knobs for one compaction run
#[derive(Debug, Clone)]
pub struct CompactOptions {
    /// Directory holding `progress.log` and its sibling artifacts
    pub project_dir: PathBuf,
    /// Sessions kept verbatim in the rewritten log
    pub keep_recent: usize,
    /// Minimum line count before compaction is worthwhile
    pub threshold_lines: usize,
    /// Compact even below the threshold
    pub force: bool,
}

impl CompactOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            keep_recent: DEFAULT_KEEP_RECENT,
            threshold_lines: DEFAULT_THRESHOLD_LINES,
            force: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum CompactError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// How a compaction run concluded. Skips are successes, not errors: they
/// report why nothing was changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No `progress.log` in the project directory
    SkippedNoSource,
    /// The log is still small enough to leave alone
    SkippedBelowThreshold { lines: usize, threshold: usize },
    /// Non-empty file but zero parsable sessions; nothing was touched
    SkippedUnparsable,
    /// Artifacts written and the live log rewritten
    Completed {
        archive_path: PathBuf,
        digest_path: PathBuf,
        retained: usize,
    },
}

/// Compact the project's progress log using the current wall clock.
pub fn compact(opts: &CompactOptions) -> Result<Outcome, CompactError> {
    compact_at(opts, Local::now().naive_local())
}

/// Compaction with an explicit clock; `now` stamps the digest header and the
/// archive collision suffix, which keeps runs reproducible under test.
pub fn compact_at(opts: &CompactOptions, now: NaiveDateTime) -> Result<Outcome, CompactError> {
    let paths = ProjectPaths::new(&opts.project_dir);
    let log_path = paths.progress_log();

    if !log_path.exists() {
        tracing::info!(path = %log_path.display(), "no progress log, nothing to compact");
        return Ok(Outcome::SkippedNoSource);
    }

    let raw = std::fs::read_to_string(&log_path).map_err(|source| CompactError::Read {
        path: log_path.clone(),
        source,
    })?;

    let lines = raw.lines().count();
    if !opts.force && lines < opts.threshold_lines {
        tracing::info!(lines, threshold = opts.threshold_lines, "below threshold, skipping");
        return Ok(Outcome::SkippedBelowThreshold {
            lines,
            threshold: opts.threshold_lines,
        });
    }
    if opts.force {
        tracing::warn!("force enabled, compacting regardless of threshold");
    }

    let records = parse(&raw);
    if records.is_empty() {
        tracing::info!(lines, "no parsable sessions, leaving log untouched");
        return Ok(Outcome::SkippedUnparsable);
    }
    let total = records.len();

    let (older, recent) = partition(records, opts.keep_recent);
    let digest = build_digest(&older, &recent, now);

    // The untouched original goes to the archive before anything destructive
    // happens. A failure past this point still leaves history recoverable.
    let archive_path = paths.fresh_archive(now);
    atomic_write(&archive_path, raw.as_bytes()).map_err(|source| CompactError::Write {
        path: archive_path.clone(),
        source,
    })?;

    let digest_path = paths.summary();
    atomic_write(&digest_path, digest.as_bytes()).map_err(|source| CompactError::Write {
        path: digest_path.clone(),
        source,
    })?;

    let rewritten = render_log(&recent);
    atomic_write(&log_path, rewritten.as_bytes()).map_err(|source| CompactError::Write {
        path: log_path.clone(),
        source,
    })?;

    tracing::info!(
        total,
        retained = recent.len(),
        archive = %archive_path.display(),
        "compaction complete"
    );
    Ok(Outcome::Completed {
        archive_path,
        digest_path,
        retained: recent.len(),
    })
}

/// Render the retained sessions in the same structure the parser reads, so
/// the rewritten log stays valid input for the next run.
fn render_log(recent: &[SessionRecord]) -> String {
    let mut out = String::from("# Progress Log\n\n");
    out.push_str(&format!(
        "> **Last {} sessions**. For full history, see `progress.log.archive` or `progress_summary.md`.\n\n",
        recent.len()
    ));
    for record in recent {
        out.push_str(&format!(
            "## [{}]\n\n{}\n\n",
            record.timestamp_text, record.body
        ));
    }
    out
}
