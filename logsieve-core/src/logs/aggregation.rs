use crate::logs::constants::VOLATILE_PREFIX;
use crate::logs::report::SortedReport;
use crate::logs::sort::sort_by_occurrence;
use crate::logs::tally::tally;
use crate::logs::types::LogRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LEADING_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^{VOLATILE_PREFIX}(?P<marker>Log)"))
        .expect("volatile prefix pattern is valid")
});

/// Removes the `[timestamp][frame]` pair sitting directly in front of the `Log` marker.
pub fn dedup_key(raw_text: &str) -> Cow<'_, str> {
    LEADING_PREFIX.replace(raw_text, "$marker")
}

/// Mutable accumulator for one aggregation scope: a single file or the whole run.
#[derive(Debug, Default)]
pub struct AggregateReport {
    source_file: Option<String>,
    total_count: u64,
    unique_entries: Vec<LogRecord>,
}

impl AggregateReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_source(name: impl Into<String>) -> Self {
        Self {
            source_file: Some(name.into()),
            ..Self::default()
        }
    }

    /// Folds one record into the unique-entry table.
    ///
    /// Matching is asymmetric: only the stored entry has its volatile prefix removed
    /// before comparing against the incoming raw line. The first occurrence of a
    /// statement therefore decides what later lines must look like to fold into it.
    pub fn fold(&mut self, record: LogRecord) {
        self.total_count += 1;

        let incoming = record.raw_text();
        let existing = self
            .unique_entries
            .iter_mut()
            .find(|entry| entry.raw_text() == incoming || dedup_key(entry.raw_text()) == incoming);

        match existing {
            Some(entry) => entry.absorb(record.raw_text().to_string()),
            None => self.unique_entries.push(record),
        }
    }

    pub fn fold_all(&mut self, records: impl IntoIterator<Item = LogRecord>) {
        for record in records {
            self.fold(record);
        }
    }

    pub fn source_file(&self) -> Option<&str> {
        self.source_file.as_deref()
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Entries in first-seen order.
    pub fn unique_entries(&self) -> &[LogRecord] {
        &self.unique_entries
    }

    /// Tallies and sorts the table. The result is read-only.
    pub fn finish(self) -> SortedReport {
        let (type_counts, category_counts) = tally(&self.unique_entries);
        let entries = sort_by_occurrence(self.unique_entries);

        SortedReport::new(
            self.source_file,
            self.total_count,
            entries,
            type_counts,
            category_counts,
        )
    }
}
