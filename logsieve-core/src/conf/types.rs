use crate::logs::{AggregationMode, FilterConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Contents of `logsieve.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogsieveConfig {
    /// Folder searched for log files that are not found by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<PathBuf>,

    /// Report file written next to the console output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    pub consolidate: bool,
    pub summarize: bool,
    pub log_list: bool,
    pub color: bool,
    pub filter: FilterConfig,
}

impl Default for LogsieveConfig {
    fn default() -> Self {
        Self {
            folder: None,
            output: None,
            consolidate: true,
            summarize: false,
            log_list: true,
            color: true,
            filter: FilterConfig::default(),
        }
    }
}

impl LogsieveConfig {
    pub fn aggregation_mode(&self) -> AggregationMode {
        if self.consolidate {
            AggregationMode::Consolidated
        } else {
            AggregationMode::PerFile
        }
    }
}
