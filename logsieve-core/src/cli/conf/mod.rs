mod check;
mod dump;
mod init;

pub use check::{check, config_error_hint};
pub use dump::dump;
pub use init::init;

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfCmd {
    /// Load and validate a config file
    Check {
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },

    /// Print the effective config
    Dump {
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Print YAML instead of JSON
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter config file
    Init {
        #[arg(default_value = crate::conf::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfCmd) -> anyhow::Result<()> {
    match cmd {
        ConfCmd::Check { path } => check(path),
        ConfCmd::Dump { path, yaml } => dump(path, yaml),
        ConfCmd::Init { path } => init(path),
    }
}
