//! Log Processing Pipeline
//!
//! This module turns raw engine log text into a deduplicated, counted and sorted report.
//!
//! Engine logs are noisy: the same warning can be printed thousands of times, each copy
//! stamped with a different `[timestamp][frame]` prefix. The pipeline pulls the log
//! statements out of the text, splits each one into its category, type and message, and
//! folds repeats of the same statement into a single entry that remembers how often it
//! was seen.
//!
//! There are two ways to aggregate:
//! - **Consolidated**: every input file feeds one shared report
//! - **Per-file**: every input file gets its own report, kept in input order
//!
//! Once all text has been folded, each report is tallied (counts per type and per
//! category), sorted by how often each entry occurred, and frozen. The frozen report is
//! then filtered and rendered for the reader.
//!
//! The overall data processing architecture is:
//!
//! raw text
//! extract_lines
//! decompose
//! LogRecord
//! AggregateReport (fold)
//! tally
//! sort_by_occurrence
//! SortedReport
//! apply_filter
//! ReportRenderer
//!

mod aggregation;
mod constants;
mod filter;
mod parse;
mod render;
mod report;
mod run;
mod sort;
mod tally;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{AggregateReport, dedup_key};
pub use constants::{ERRORS_BUCKET, GENERAL_BUCKET, VERBOSE_BUCKET, WARNINGS_BUCKET};
pub use filter::{FieldFilter, FilterConfig, FilteredReport, apply_filter};
pub use parse::{decompose, extract_lines, is_valid_type_token, parse_text};
pub use render::ReportRenderer;
pub use report::SortedReport;
pub use run::{AggregationMode, Pipeline, RunOptions, RunSummary, run};
pub use sort::sort_by_occurrence;
pub use tally::{CategoryCounts, TypeCounts, tally};
pub use types::LogRecord;
