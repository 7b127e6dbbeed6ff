//! Splitting the record sequence into older and recent groups

use crate::record::SessionRecord;

/// Split records into `(older, recent)` where `recent` is the last
/// `keep_recent` records in source order. `keep_recent = 0` is legal and
/// puts everything in `older`. No reordering occurs.
pub fn partition(
    mut records: Vec<SessionRecord>,
    keep_recent: usize,
) -> (Vec<SessionRecord>, Vec<SessionRecord>) {
    let cut = records.len().saturating_sub(keep_recent);
    let recent = records.split_off(cut);
    (records, recent)
}
