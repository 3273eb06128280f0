use crate::logs::report::SortedReport;
use crate::logs::tally::TypeCounts;
use crate::logs::types::LogRecord;
use serde::{Deserialize, Serialize};

/// Allow/deny rules for one record field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldFilter {
    /// Skip filtering on this field entirely.
    pub ignore: bool,
    /// Keep records where the field is absent.
    pub allow_undefined: bool,
    /// When non-empty, only these values are kept.
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
}

impl Default for FieldFilter {
    fn default() -> Self {
        Self {
            ignore: false,
            allow_undefined: true,
            whitelist: Vec::new(),
            blacklist: Vec::new(),
        }
    }
}

impl FieldFilter {
    pub fn excludes(&self, value: Option<&str>) -> bool {
        if self.ignore {
            return false;
        }

        match value {
            None => !self.allow_undefined,
            Some(value) => {
                let value = value.trim();
                let listed = |list: &[String]| {
                    list.iter()
                        .any(|candidate| candidate.trim().eq_ignore_ascii_case(value))
                };

                (!self.whitelist.is_empty() && !listed(self.whitelist.as_slice()))
                    || listed(self.blacklist.as_slice())
            }
        }
    }

    /// Values present on both lists.
    pub fn conflicting_values(&self) -> Vec<&str> {
        self.whitelist
            .iter()
            .filter(|w| {
                self.blacklist
                    .iter()
                    .any(|b| b.trim().eq_ignore_ascii_case(w.trim()))
            })
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    #[serde(rename = "type")]
    pub severity: FieldFilter,
    pub category: FieldFilter,
    /// Rows shown in the per-category breakdown. Falls back to `category`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_breakdown: Option<FieldFilter>,
}

impl FilterConfig {
    pub fn breakdown_filter(&self) -> &FieldFilter {
        self.category_breakdown.as_ref().unwrap_or(&self.category)
    }

    fn excludes(&self, entry: &LogRecord) -> bool {
        self.severity.excludes(entry.severity_type.as_deref())
            || self.category.excludes(entry.category.as_deref())
    }
}

/// Read-only filtered view of a `SortedReport`.
#[derive(Debug)]
pub struct FilteredReport<'a> {
    report: &'a SortedReport,
    entries: Vec<&'a LogRecord>,
    total_count: u64,
    type_counts: TypeCounts,
    category_rows: Vec<(Option<&'a str>, u64)>,
}

impl<'a> FilteredReport<'a> {
    pub fn source_file(&self) -> Option<&'a str> {
        self.report.source_file()
    }

    /// Kept entries, ascending by occurrence count.
    pub fn entries(&self) -> &[&'a LogRecord] {
        &self.entries
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn unique_count(&self) -> usize {
        self.entries.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.report.unique_count() - self.entries.len()
    }

    pub fn type_counts(&self) -> &TypeCounts {
        &self.type_counts
    }

    /// Category breakdown rows after the breakdown filter. `None` is the `general` row.
    pub fn category_rows(&self) -> &[(Option<&'a str>, u64)] {
        &self.category_rows
    }
}

/// Drops excluded entries from the view and takes them out of the totals.
///
/// The total and the entry's type bucket both shrink by the entry's occurrence count.
pub fn apply_filter<'a>(report: &'a SortedReport, filter: &FilterConfig) -> FilteredReport<'a> {
    let mut total_count = report.total_count();
    let mut type_counts = report.type_counts().clone();
    let mut entries = Vec::with_capacity(report.unique_count());

    for entry in report.entries() {
        if filter.excludes(entry) {
            let occurrences = entry.occurrence_count();
            total_count = total_count.saturating_sub(occurrences);
            type_counts.decrement_by(
                &TypeCounts::bucket_for(entry.severity_type.as_deref()),
                occurrences,
            );
        } else {
            entries.push(entry);
        }
    }

    let breakdown = filter.breakdown_filter();
    let category_rows = report
        .category_counts()
        .iter()
        .filter(|(category, _)| !breakdown.excludes(*category))
        .collect();

    FilteredReport {
        report,
        entries,
        total_count,
        type_counts,
        category_rows,
    }
}
