use crate::logs::filter::FilteredReport;
use crate::logs::report::SortedReport;
use owo_colors::{OwoColorize, Style};
use std::fmt::Write;

const UNDEFINED: &str = "<undefined>";

/// Turns reports into human-readable text.
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    pub color: bool,
    /// Include every kept entry, not just the breakdowns.
    pub log_list: bool,
}

impl ReportRenderer {
    pub fn new(color: bool, log_list: bool) -> Self {
        Self { color, log_list }
    }

    pub fn plain(self) -> Self {
        Self {
            color: false,
            ..self
        }
    }

    fn paint(&self, text: impl std::fmt::Display, style: Style) -> String {
        if self.color {
            format!("{}", text.style(style))
        } else {
            text.to_string()
        }
    }

    fn type_style(bucket: &str) -> Style {
        match bucket {
            "errors" | "error" => Style::new().red().bold(),
            "warnings" | "warning" => Style::new().yellow().bold(),
            _ => Style::new(),
        }
    }

    pub fn render(&self, report: &FilteredReport<'_>) -> String {
        let mut out = String::new();

        let scope = report.source_file().unwrap_or("all files");
        let _ = writeln!(
            out,
            "{}",
            self.paint(format!("Log report: {scope}"), Style::new().bold().underline())
        );
        let _ = writeln!(
            out,
            "Total: {} lines | {} unique | {} filtered out\n",
            report.total_count(),
            report.unique_count(),
            report.excluded_count()
        );

        out.push_str("By type:\n");
        for (bucket, count) in report.type_counts().iter() {
            let _ = writeln!(
                out,
                "  {} {:>8}",
                self.paint(format!("{bucket:<16}"), Self::type_style(bucket)),
                count
            );
        }
        out.push('\n');

        if report.category_rows().is_empty() {
            out.push_str("By category: <none>\n");
        } else {
            out.push_str("By category:\n");
            for (category, count) in report.category_rows() {
                let _ = writeln!(out, "  {:<24} {:>8}", category.unwrap_or("general"), count);
            }
        }

        if self.log_list {
            out.push('\n');
            out.push_str("Entries (most frequent first):\n");

            for entry in report.entries().iter().rev() {
                let severity = entry.severity_type.as_deref().unwrap_or(UNDEFINED);
                let _ = writeln!(
                    out,
                    "  {} {}",
                    self.paint(format!("[{}x]", entry.occurrence_count()), Style::new().cyan()),
                    entry.message.as_deref().unwrap_or(UNDEFINED)
                );
                let _ = writeln!(
                    out,
                    "      type: {} | category: {}",
                    self.paint(severity, Self::type_style(&severity.to_lowercase())),
                    entry.category.as_deref().unwrap_or(UNDEFINED)
                );
                let _ = writeln!(
                    out,
                    "      {}",
                    self.paint(entry.raw_text(), Style::new().dimmed())
                );
            }
        }

        out
    }

    /// Short per-file summary printed right after a file is parsed.
    pub fn render_summary(&self, report: &SortedReport) -> String {
        let counts = report.type_counts();
        let errors = self.paint(counts.errors(), Self::type_style("errors"));
        let warnings = self.paint(counts.warnings(), Self::type_style("warnings"));

        format!(
            "  {}: {} lines, {} unique, errors={} warnings={} verbose={} general={}\n",
            report.source_file().unwrap_or("<input>"),
            report.total_count(),
            report.unique_count(),
            errors,
            warnings,
            counts.verbose(),
            counts.general()
        )
    }
}
