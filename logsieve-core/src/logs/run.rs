use crate::conf::LogsieveConfig;
use crate::error::RunError;
use crate::logs::aggregation::AggregateReport;
use crate::logs::filter::{FilterConfig, apply_filter};
use crate::logs::parse::parse_text;
use crate::logs::render::ReportRenderer;
use crate::logs::report::SortedReport;
use crate::logs::types::LogRecord;
use crate::sink::ReportSink;
use crate::source::SourceLoader;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationMode {
    /// One report spanning every input file.
    Consolidated,
    /// One report per input file, in input order.
    PerFile,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub mode: AggregationMode,
    pub summarize: bool,
    pub log_list: bool,
    pub filter: FilterConfig,
}

impl From<&LogsieveConfig> for RunOptions {
    fn from(config: &LogsieveConfig) -> Self {
        Self {
            mode: config.aggregation_mode(),
            summarize: config.summarize,
            log_list: config.log_list,
            filter: config.filter.clone(),
        }
    }
}

/// Owns the aggregation state for a single run.
///
/// The mode is fixed at construction; there is no way to switch it once files start
/// flowing in.
#[derive(Debug)]
pub struct Pipeline {
    mode: AggregationMode,
    consolidated: AggregateReport,
    per_file: Vec<AggregateReport>,
}

impl Pipeline {
    pub fn new(mode: AggregationMode) -> Self {
        Self {
            mode,
            consolidated: AggregateReport::new(),
            per_file: Vec::new(),
        }
    }

    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    /// Folds one source's records into the report for the current mode.
    pub fn ingest(&mut self, name: &str, records: Vec<LogRecord>) {
        match self.mode {
            AggregationMode::Consolidated => self.consolidated.fold_all(records),
            AggregationMode::PerFile => {
                let mut report = AggregateReport::for_source(name);
                report.fold_all(records);
                self.per_file.push(report);
            }
        }
    }

    /// Tallies and sorts every report. Per-file reports keep input order.
    pub fn finish(self) -> Vec<SortedReport> {
        match self.mode {
            AggregationMode::Consolidated => vec![self.consolidated.finish()],
            AggregationMode::PerFile => self
                .per_file
                .into_iter()
                .map(AggregateReport::finish)
                .collect(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<SortedReport>,
    /// Sources that were parsed, in input order.
    pub parsed: Vec<String>,
    /// Sources that could not be loaded.
    pub skipped: Vec<String>,
}

/// Loads, parses and aggregates every named source in order, then renders the reports.
///
/// Missing sources are skipped with a warning. Only sink failures abort the run.
pub fn run<L, W>(
    names: &[String],
    loader: &L,
    options: &RunOptions,
    sink: &mut ReportSink<W>,
) -> Result<RunSummary, RunError>
where
    L: SourceLoader + ?Sized,
    W: Write,
{
    if names.is_empty() {
        tracing::warn!("no log files given, nothing to parse");
        return Ok(RunSummary::default());
    }

    let mut pipeline = Pipeline::new(options.mode);
    let mut summary = RunSummary::default();

    for name in names {
        sink.write_line(&format!("Loading {name}..."))?;

        let text = match loader.load(name) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(source = name.as_str(), error = %err, "skipping log source");
                summary.skipped.push(name.clone());
                continue;
            }
        };

        let records = parse_text(&text);
        sink.write_line(&format!("Parsed {} log lines from {name}", records.len()))?;

        if options.summarize {
            let mut report = AggregateReport::for_source(name.as_str());
            report.fold_all(records.iter().cloned());
            let report = report.finish();
            sink.write_with(|color| {
                ReportRenderer::new(color, options.log_list).render_summary(&report)
            })?;
        }

        pipeline.ingest(name, records);
        summary.parsed.push(name.clone());
    }

    summary.reports = pipeline.finish();

    for report in &summary.reports {
        let filtered = apply_filter(report, &options.filter);
        sink.write_line("")?;
        sink.write_with(|color| ReportRenderer::new(color, options.log_list).render(&filtered))?;
    }

    Ok(summary)
}
