use crate::logs::constants::{
    ERROR_TYPE, ERRORS_BUCKET, FIXED_TYPE_BUCKETS, GENERAL_BUCKET, VERBOSE_BUCKET, WARNING_TYPE,
    WARNINGS_BUCKET,
};
use crate::logs::types::LogRecord;
use std::collections::BTreeMap;

/// Unique-entry counts per severity bucket.
///
/// Starts with the fixed buckets and grows a new bucket for every custom type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCounts {
    buckets: BTreeMap<String, u64>,
}

impl Default for TypeCounts {
    fn default() -> Self {
        Self {
            buckets: FIXED_TYPE_BUCKETS
                .iter()
                .map(|b| (b.to_string(), 0))
                .collect(),
        }
    }
}

impl TypeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bucket a record with this severity type is counted under.
    pub fn bucket_for(severity_type: Option<&str>) -> String {
        match severity_type {
            Some(ERROR_TYPE) => ERRORS_BUCKET.to_string(),
            Some(WARNING_TYPE) => WARNINGS_BUCKET.to_string(),
            Some(other) => other.trim().to_lowercase(),
            None => GENERAL_BUCKET.to_string(),
        }
    }

    pub fn increment(&mut self, bucket: &str) {
        *self.buckets.entry(bucket.to_string()).or_insert(0) += 1;
    }

    pub(crate) fn decrement_by(&mut self, bucket: &str, amount: u64) {
        if let Some(count) = self.buckets.get_mut(bucket) {
            *count = count.saturating_sub(amount);
        }
    }

    pub fn get(&self, bucket: &str) -> u64 {
        self.buckets.get(bucket).copied().unwrap_or(0)
    }

    pub fn errors(&self) -> u64 {
        self.get(ERRORS_BUCKET)
    }

    pub fn warnings(&self) -> u64 {
        self.get(WARNINGS_BUCKET)
    }

    pub fn verbose(&self) -> u64 {
        self.get(VERBOSE_BUCKET)
    }

    pub fn general(&self) -> u64 {
        self.get(GENERAL_BUCKET)
    }

    pub fn total(&self) -> u64 {
        self.buckets.values().sum()
    }

    /// Fixed buckets first, then custom buckets by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        let fixed = FIXED_TYPE_BUCKETS
            .iter()
            .map(|b| (*b, self.get(b)));
        let custom = self
            .buckets
            .iter()
            .filter(|(name, _)| !FIXED_TYPE_BUCKETS.contains(&name.as_str()))
            .map(|(name, count)| (name.as_str(), *count));

        fixed.chain(custom)
    }
}

/// Unique-entry counts per category. Entries without a category land in `general`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    by_category: BTreeMap<String, u64>,
    general: u64,
}

impl CategoryCounts {
    pub fn increment(&mut self, category: Option<&str>) {
        match category {
            Some(category) => *self.by_category.entry(category.to_string()).or_insert(0) += 1,
            None => self.general += 1,
        }
    }

    pub fn get(&self, category: &str) -> u64 {
        self.by_category.get(category).copied().unwrap_or(0)
    }

    pub fn general(&self) -> u64 {
        self.general
    }

    /// Named categories by name, then the `general` row (as `None`) when non-empty.
    pub fn iter(&self) -> impl Iterator<Item = (Option<&str>, u64)> {
        let general = (self.general > 0).then_some((None, self.general));

        self.by_category
            .iter()
            .map(|(name, count)| (Some(name.as_str()), *count))
            .chain(general)
    }
}

/// Counts every unique entry once per severity bucket and once per category.
pub fn tally(entries: &[LogRecord]) -> (TypeCounts, CategoryCounts) {
    let mut types = TypeCounts::new();
    let mut categories = CategoryCounts::default();

    for entry in entries {
        types.increment(&TypeCounts::bucket_for(entry.severity_type.as_deref()));
        categories.increment(entry.category.as_deref());
    }

    let bucket_total = types.total();
    if bucket_total != entries.len() as u64 {
        tracing::warn!(
            bucket_total,
            unique_entries = entries.len(),
            "type bucket counts do not add up to the unique entry count"
        );
    }

    (types, categories)
}
