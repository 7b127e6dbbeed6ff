//! Session record types

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp layout used by session headers and digest rendering
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Sentinel feature id used when no identifier pattern matches
pub const UNKNOWN_FEATURE: &str = "UNKNOWN";

/// Outcome of a single work session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Completed,
    Failed,
    Blocked,
    Unknown,
}

impl Status {
    /// Lowercase label matching the wire form used in digests
    pub fn label(&self) -> &'static str {
        match self {
            Status::Completed => "completed",
            Status::Failed => "failed",
            Status::Blocked => "blocked",
            Status::Unknown => "unknown",
        }
    }
}

/// One parsed unit of work, bounded by `## [..]` headers in the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub timestamp: NaiveDateTime,
    /// Original header text, reproduced byte-exactly in output
    pub timestamp_text: String,
    pub feature_id: String,
    pub status: Status,
    /// Session text with leading/trailing whitespace trimmed
    pub body: String,
}
