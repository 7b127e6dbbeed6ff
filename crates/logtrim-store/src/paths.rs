//! Artifact layout inside a project directory

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

pub const PROGRESS_LOG: &str = "progress.log";
pub const ARCHIVE: &str = "progress.log.archive";
pub const SUMMARY: &str = "progress_summary.md";

/// Suffix appended to disambiguate colliding archive paths
const ARCHIVE_SUFFIX_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Resolves the three compaction artifacts for one project directory
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The live log
    pub fn progress_log(&self) -> PathBuf {
        self.root.join(PROGRESS_LOG)
    }

    /// The digest, replaced wholesale on each run
    pub fn summary(&self) -> PathBuf {
        self.root.join(SUMMARY)
    }

    /// Default archive location
    pub fn archive(&self) -> PathBuf {
        self.root.join(ARCHIVE)
    }

    /// An archive path that is free to write: the default location, or a
    /// timestamp-suffixed sibling when a previous archive already sits there.
    /// Existing archives are never overwritten.
    pub fn fresh_archive(&self, now: NaiveDateTime) -> PathBuf {
        let default = self.archive();
        if default.exists() {
            self.root
                .join(format!("{ARCHIVE}.{}", now.format(ARCHIVE_SUFFIX_FORMAT)))
        } else {
            default
        }
    }
}
