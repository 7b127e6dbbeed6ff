//! Filesystem side of progress-log compaction: artifact paths, staged
//! writes, and the orchestrator that ties the pure pipeline to disk.

mod compact;
mod io;
mod paths;

pub use compact::{
    compact, compact_at, CompactError, CompactOptions, Outcome, DEFAULT_KEEP_RECENT,
    DEFAULT_THRESHOLD_LINES,
};
pub use io::atomic_write;
pub use paths::ProjectPaths;
