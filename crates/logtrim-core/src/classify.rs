//! Deriving feature id and status from session free text
//!
//! Both derivations are pure functions of the body. Status markers are an
//! ordered table checked top to bottom; the first row with any matching
//! marker wins, so a body carrying both a success and a failure marker
//! resolves to completed. That tie-break is part of the contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::{Status, UNKNOWN_FEATURE};

// `<kind>-<identifier>` convention, e.g. feat-login, fix-race, refactor-io
static KIND_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:feat|fix|refactor)-(\w+)").expect("kind token pattern"));

// fallback: bare uppercase/numeric id after a `#` marker, e.g. #AUTH42
static HASH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([A-Z0-9]+)").expect("hash token pattern"));

/// Marker rows in priority order. First row with any hit wins.
const STATUS_MARKERS: &[(&[&str], Status)] = &[
    (&["✅", "完成", "Completed"], Status::Completed),
    (&["❌", "失败", "Failed"], Status::Failed),
    (&["⚠️", "阻塞", "Blocked"], Status::Blocked),
];

/// Extract the feature identifier from session text
pub fn feature_id(body: &str) -> String {
    if let Some(caps) = KIND_TOKEN.captures(body) {
        return caps[1].to_string();
    }
    if let Some(caps) = HASH_TOKEN.captures(body) {
        return caps[1].to_string();
    }
    UNKNOWN_FEATURE.to_string()
}

/// Derive the session status from marker presence
pub fn status(body: &str) -> Status {
    for (markers, status) in STATUS_MARKERS {
        if markers.iter().any(|marker| body.contains(marker)) {
            return *status;
        }
    }
    Status::Unknown
}

/// Classify a session body into `(feature_id, status)`
pub fn classify(body: &str) -> (String, Status) {
    (feature_id(body), status(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_id_kind_token() {
        assert_eq!(feature_id("Worked on feat-login today"), "login");
        assert_eq!(feature_id("fix-race_condition in the pool"), "race_condition");
        assert_eq!(feature_id("big refactor-io pass"), "io");
    }

    #[test]
    fn test_feature_id_hash_fallback() {
        assert_eq!(feature_id("Progress on #AUTH42 continues"), "AUTH42");
    }

    #[test]
    fn test_feature_id_kind_token_wins_over_hash() {
        assert_eq!(feature_id("feat-search relates to #LEGACY1"), "search");
    }

    #[test]
    fn test_feature_id_unknown_fallback() {
        assert_eq!(feature_id("general cleanup, nothing tagged"), "UNKNOWN");
        // lowercase hash ids do not match the fallback pattern
        assert_eq!(feature_id("see #issue for details"), "UNKNOWN");
    }

    #[test]
    fn test_status_markers() {
        assert_eq!(status("shipped it ✅"), Status::Completed);
        assert_eq!(status("tests Failed again"), Status::Failed);
        assert_eq!(status("⚠️ waiting on upstream"), Status::Blocked);
        assert_eq!(status("阻塞 on review"), Status::Blocked);
        assert_eq!(status("no markers here"), Status::Unknown);
    }

    #[test]
    fn test_status_priority_success_beats_failure() {
        // documented tie-break: completed > failed > blocked
        assert_eq!(status("first try ❌ then ✅ done"), Status::Completed);
        assert_eq!(status("❌ Failed but also ⚠️ Blocked"), Status::Failed);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let body = "feat-cache landed ✅ after #RETRY3";
        assert_eq!(classify(body), classify(body));
        assert_eq!(classify(body), ("cache".to_string(), Status::Completed));
    }

    #[test]
    fn test_classify_empty_body() {
        assert_eq!(classify(""), ("UNKNOWN".to_string(), Status::Unknown));
    }
}
