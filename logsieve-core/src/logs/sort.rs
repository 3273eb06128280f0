use crate::logs::types::LogRecord;
use std::collections::BTreeMap;

/// Orders entries by ascending occurrence count.
///
/// Entries are bucketed by count and the buckets concatenated in key order, so entries
/// sharing a count keep their relative input order. No comparison between records is
/// ever made.
pub fn sort_by_occurrence(entries: Vec<LogRecord>) -> Vec<LogRecord> {
    let mut buckets: BTreeMap<u64, Vec<LogRecord>> = BTreeMap::new();

    for entry in entries {
        buckets
            .entry(entry.occurrence_count())
            .or_default()
            .push(entry);
    }

    buckets.into_values().flatten().collect()
}
