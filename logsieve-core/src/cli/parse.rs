use crate::conf::{LogsieveConfig, load_or_default};
use crate::logging::default_color;
use crate::logs::{RunOptions, RunSummary, run};
use crate::sink::ReportSink;
use crate::source::{FsSourceLoader, discover};
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct ParseArgs {
    /// Log files to parse, by path or by name inside the log folder
    pub files: Vec<String>,

    /// Parse every *.log file in the log folder
    #[arg(long)]
    pub all: bool,

    /// Path to the logsieve config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Folder searched for log files
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Merge all files into one report
    #[arg(long, conflicts_with = "per_file")]
    pub consolidate: bool,

    /// Keep one report per file
    #[arg(long)]
    pub per_file: bool,

    /// Print a short summary after each file is parsed
    #[arg(long)]
    pub summarize: bool,

    /// Only print the breakdowns, not every entry
    #[arg(long)]
    pub no_log_list: bool,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

impl ParseArgs {
    /// Folds command-line overrides into the loaded config.
    pub fn apply(&self, mut config: LogsieveConfig) -> LogsieveConfig {
        if let Some(folder) = &self.folder {
            config.folder = Some(folder.clone());
        }
        if let Some(output) = &self.output {
            config.output = Some(output.clone());
        }
        if self.consolidate {
            config.consolidate = true;
        }
        if self.per_file {
            config.consolidate = false;
        }
        if self.summarize {
            config.summarize = true;
        }
        if self.no_log_list {
            config.log_list = false;
        }
        if self.plain {
            config.color = false;
        }
        config
    }
}

pub fn run_parse(args: ParseArgs) -> Result<RunSummary> {
    let config = args.apply(load_or_default(args.config.as_deref())?);
    let names = source_names(&args, &config)?;

    let loader = FsSourceLoader::new(config.folder.clone());
    let options = RunOptions::from(&config);
    let color = config.color && default_color();

    let mut sink = ReportSink::stdout(config.output.as_deref(), color)?;
    let result = run(&names, &loader, &options, &mut sink);

    // Release the sink before surfacing a run failure.
    let finished = sink.finish();
    let summary = result?;
    finished?;

    if let Some(output) = &config.output {
        tracing::info!(path = %output.display(), "report written");
    }
    Ok(summary)
}

fn source_names(args: &ParseArgs, config: &LogsieveConfig) -> Result<Vec<String>> {
    let mut names = args.files.clone();

    if args.all {
        let root = config.folder.as_deref().unwrap_or_else(|| Path::new("."));
        let found = discover(root, "*.log")?;
        tracing::info!(folder = %root.display(), count = found.len(), "discovered log files");
        names.extend(found.into_iter().map(|p| p.to_string_lossy().into_owned()));
    }

    Ok(names)
}
