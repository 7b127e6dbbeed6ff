//! Splitting raw log text into ordered session records

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::classify::classify;
use crate::record::{SessionRecord, TIMESTAMP_FORMAT};

// Session boundary: a `## [YYYY-MM-DD HH:MM]` header at the start of a line.
static SESSION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^## \[(\d{4}-\d{2}-\d{2} \d{2}:\d{2})\]").expect("session header pattern")
});

/// Parse raw log text into session records, in source order.
///
/// Text before the first header is preamble and is discarded. A header whose
/// timestamp fails strict parsing drops that whole session; nothing else in
/// the log is affected. Never errors, never panics: malformed input degrades
/// to a shorter (possibly empty) sequence.
pub fn parse(raw: &str) -> Vec<SessionRecord> {
    let headers: Vec<(std::ops::Range<usize>, &str)> = SESSION_HEADER
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let ts = caps.get(1)?;
            Some((whole.range(), ts.as_str()))
        })
        .collect();

    let mut records = Vec::with_capacity(headers.len());
    for (i, (range, ts_text)) in headers.iter().enumerate() {
        let body_end = headers
            .get(i + 1)
            .map_or(raw.len(), |(next, _)| next.start);
        let body = raw[range.end..body_end].trim();

        let timestamp = match NaiveDateTime::parse_from_str(ts_text, TIMESTAMP_FORMAT) {
            Ok(ts) => ts,
            Err(_) => {
                tracing::debug!(header = %ts_text, "dropping session with unparsable timestamp");
                continue;
            }
        };

        let (feature_id, status) = classify(body);
        records.push(SessionRecord {
            timestamp,
            timestamp_text: (*ts_text).to_string(),
            feature_id,
            status,
            body: body.to_string(),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;

    const SAMPLE: &str = "\
# Progress Log

preamble text, not a session

## [2025-01-10 09:00]

Started feat-login ✅ Completed

## [2025-01-11 14:30]

fix-timeout attempt ❌ Failed

## [2025-01-12 08:15]

Waiting on #INFRA9 ⚠️
";

    #[test]
    fn test_parse_basic_sessions() {
        let records = parse(SAMPLE);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].timestamp_text, "2025-01-10 09:00");
        assert_eq!(records[0].feature_id, "login");
        assert_eq!(records[0].status, Status::Completed);
        assert_eq!(records[0].body, "Started feat-login ✅ Completed");

        assert_eq!(records[1].status, Status::Failed);
        assert_eq!(records[2].feature_id, "INFRA9");
        assert_eq!(records[2].status, Status::Blocked);
    }

    #[test]
    fn test_parse_preserves_source_order() {
        // deliberately out of chronological order; parser must not re-sort
        let raw = "## [2025-02-02 10:00]\n\nlater ✅\n\n## [2025-01-01 10:00]\n\nearlier ❌\n";
        let records = parse(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp_text, "2025-02-02 10:00");
        assert_eq!(records[1].timestamp_text, "2025-01-01 10:00");
    }

    #[test]
    fn test_parse_no_headers_yields_empty() {
        assert!(parse("just some notes\nwith no sessions\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_parse_header_with_empty_body() {
        let records = parse("## [2025-01-10 09:00]\n## [2025-01-10 10:00]\n\ncontent ✅\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body, "");
        assert_eq!(records[0].status, Status::Unknown);
        assert_eq!(records[1].body, "content ✅");
    }

    #[test]
    fn test_parse_drops_malformed_timestamp() {
        // matches the header shape but is not a real date
        let raw = "## [2025-13-40 99:99]\n\nbogus ✅\n\n## [2025-01-10 09:00]\n\nreal ✅\n";
        let records = parse(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].timestamp_text, "2025-01-10 09:00");
    }

    #[test]
    fn test_parse_ignores_mid_line_header_lookalike() {
        let raw = "## [2025-01-10 09:00]\n\nmentioned ## [2025-01-11 10:00] inline ✅\n";
        let records = parse(raw);
        assert_eq!(records.len(), 1);
        assert!(records[0].body.contains("inline"));
    }

    #[test]
    fn test_parse_is_pure() {
        let a = parse(SAMPLE);
        let b = parse(SAMPLE);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.timestamp_text, y.timestamp_text);
            assert_eq!(x.body, y.body);
            assert_eq!(x.status, y.status);
        }
    }
}
