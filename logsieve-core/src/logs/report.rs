use crate::logs::tally::{CategoryCounts, TypeCounts};
use crate::logs::types::LogRecord;

/// A tallied, sorted report. Nothing mutates it once built.
#[derive(Debug, Clone)]
pub struct SortedReport {
    source_file: Option<String>,
    total_count: u64,
    entries: Vec<LogRecord>,
    type_counts: TypeCounts,
    category_counts: CategoryCounts,
}

impl SortedReport {
    pub(crate) fn new(
        source_file: Option<String>,
        total_count: u64,
        entries: Vec<LogRecord>,
        type_counts: TypeCounts,
        category_counts: CategoryCounts,
    ) -> Self {
        Self {
            source_file,
            total_count,
            entries,
            type_counts,
            category_counts,
        }
    }

    pub fn source_file(&self) -> Option<&str> {
        self.source_file.as_deref()
    }

    /// Raw lines folded into this report, duplicates included.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries ordered by ascending occurrence count.
    pub fn entries(&self) -> &[LogRecord] {
        &self.entries
    }

    pub fn type_counts(&self) -> &TypeCounts {
        &self.type_counts
    }

    pub fn category_counts(&self) -> &CategoryCounts {
        &self.category_counts
    }
}
