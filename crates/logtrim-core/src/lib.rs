//! Pure compaction pipeline for progress logs
//!
//! Parsing, classification, partitioning, and digest rendering with no I/O;
//! the `logtrim-store` crate owns the filesystem side.

mod classify;
mod digest;
mod parser;
mod partition;
mod record;

pub use classify::{classify, feature_id, status};
pub use digest::build_digest;
pub use parser::parse;
pub use partition::partition;
pub use record::{SessionRecord, Status, TIMESTAMP_FORMAT, UNKNOWN_FEATURE};
