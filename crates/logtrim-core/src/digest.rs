//! Rendering the compaction digest
//!
//! The digest is a markdown document: aggregate statistics, full detail for
//! the recent partition, a compressed listing of the older partition, and a
//! highlight of the most recent failures. Output is byte-identical for fixed
//! inputs and a fixed `now`; the caller-supplied timestamp is the only
//! non-deterministic field and is confined to the single `**Generated**:` line.

use chrono::NaiveDateTime;

use crate::record::{SessionRecord, Status};

/// Max chars of body reproduced for each recent session
const DETAIL_LIMIT: usize = 500;
/// Max chars of body excerpted for older failed/blocked sessions
const EXCERPT_LIMIT: usize = 120;
/// Max chars of body excerpted in the recent-failures highlight
const FAILURE_EXCERPT_LIMIT: usize = 200;
/// How many trailing failures to highlight
const RECENT_FAILURES: usize = 5;

/// Build the digest for one compaction run.
///
/// `older` and `recent` are the two halves of the partition, both in source
/// order; statistics cover their union.
pub fn build_digest(
    older: &[SessionRecord],
    recent: &[SessionRecord],
    now: NaiveDateTime,
) -> String {
    let total = older.len() + recent.len();
    if total == 0 {
        return "# Progress Summary\n\nNo sessions recorded yet.\n".to_string();
    }

    let count = |status: Status| {
        older
            .iter()
            .chain(recent)
            .filter(|r| r.status == status)
            .count()
    };
    let completed = count(Status::Completed);
    let success_rate = completed as f64 / total as f64 * 100.0;

    let mut lines: Vec<String> = vec![
        "# Progress Summary".to_string(),
        String::new(),
        format!("**Generated**: {}", now.format("%Y-%m-%d %H:%M:%S")),
        format!("**Total Sessions**: {total}"),
        format!(
            "**Showing**: Last {} sessions in detail, older sessions summarized",
            recent.len()
        ),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Project Statistics".to_string(),
        String::new(),
        format!("- **Completed**: {completed}"),
        format!("- **Failed**: {}", count(Status::Failed)),
        format!("- **Blocked**: {}", count(Status::Blocked)),
        format!("- **Unknown**: {}", count(Status::Unknown)),
        format!("- **Success Rate**: {success_rate:.1}%"),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Recent Sessions (Detailed)".to_string(),
        String::new(),
    ];

    for record in recent {
        lines.push(format!(
            "### [{}] Feature {} - {}",
            record.timestamp_text,
            record.feature_id,
            record.status.label().to_uppercase()
        ));
        lines.push(String::new());
        lines.push(truncate(&record.body, DETAIL_LIMIT));
        lines.push(String::new());
    }

    if !older.is_empty() {
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push("## Historical Summary (Compressed)".to_string());
        lines.push(String::new());

        let older_completed: Vec<_> = older
            .iter()
            .filter(|r| r.status == Status::Completed)
            .collect();
        if !older_completed.is_empty() {
            lines.push(format!(
                "### Completed ({} sessions)",
                older_completed.len()
            ));
            lines.push(String::new());
            for record in &older_completed {
                lines.push(format!("- [{}] {}", record.timestamp_text, record.feature_id));
            }
            lines.push(String::new());
        }

        let older_stuck: Vec<_> = older
            .iter()
            .filter(|r| matches!(r.status, Status::Failed | Status::Blocked))
            .collect();
        if !older_stuck.is_empty() {
            lines.push(format!("### Failed/Blocked ({} sessions)", older_stuck.len()));
            lines.push(String::new());
            for record in &older_stuck {
                lines.push(format!(
                    "- [{}] {} - {}: {}",
                    record.timestamp_text,
                    record.feature_id,
                    record.status.label(),
                    excerpt(&record.body, EXCERPT_LIMIT)
                ));
            }
            lines.push(String::new());
        }
    }

    // Last failures across the whole set, not just the older half, so
    // actionable context survives compaction.
    let failures: Vec<_> = older
        .iter()
        .chain(recent)
        .filter(|r| r.status == Status::Failed)
        .collect();
    if !failures.is_empty() {
        lines.push("---".to_string());
        lines.push(String::new());
        lines.push("## Recent Failures".to_string());
        lines.push(String::new());
        let start = failures.len().saturating_sub(RECENT_FAILURES);
        for record in &failures[start..] {
            lines.push(format!(
                "- **{}** ([{}]): {}",
                record.feature_id,
                record.timestamp_text,
                excerpt(&record.body, FAILURE_EXCERPT_LIMIT)
            ));
        }
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("For full session history, see `progress.log.archive`.".to_string());
    lines.push(String::new());

    lines.join("\n")
}

/// Cut `text` at a char boundary, appending a marker when anything was lost.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let head: String = text.chars().take(limit).collect();
        format!("{head}...")
    }
}

/// Single-line excerpt: whitespace collapsed, then truncated.
fn excerpt(text: &str, limit: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&flat, limit)
}
