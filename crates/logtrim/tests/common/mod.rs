use std::path::Path;

use logtrim_core::Status;

/// Write a progress.log with `statuses.len()` sessions, one per day, each
/// tagged `feat-itemN` and carrying the marker for its status.
pub fn write_log(dir: &Path, statuses: &[Status]) {
    let mut raw = String::from("# Progress Log\n\nproject notes, not a session\n\n");
    for (i, status) in statuses.iter().enumerate() {
        let marker = match status {
            Status::Completed => "✅ Completed",
            Status::Failed => "❌ Failed",
            Status::Blocked => "⚠️ Blocked",
            Status::Unknown => "(no outcome recorded)",
        };
        raw.push_str(&format!(
            "## [2025-05-{:02} 10:00]\n\nWorked on feat-item{} today.\n{}\n\n",
            i % 28 + 1,
            i,
            marker
        ));
    }
    std::fs::write(dir.join("progress.log"), raw).unwrap();
}

/// 12 sessions: 8 completed, 3 failed, 1 blocked.
pub fn twelve_mixed() -> Vec<Status> {
    let mut statuses = vec![Status::Completed; 12];
    statuses[2] = Status::Failed;
    statuses[5] = Status::Failed;
    statuses[9] = Status::Failed;
    statuses[7] = Status::Blocked;
    statuses
}
