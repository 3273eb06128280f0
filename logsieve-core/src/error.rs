use crate::conf::ConfigError;
use crate::source::SourceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run. Per-file and per-line problems never surface here.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to open report output {path}: {source}")]
    OpenOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {target}: {source}")]
    Sink {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl RunError {
    pub fn sink(target: impl Into<String>, source: std::io::Error) -> Self {
        Self::Sink {
            target: target.into(),
            source,
        }
    }
}
