use clap::{Parser, Subcommand};
use logsieve_core::cli::{self, ParseArgs, run_parse};
use logsieve_core::logging::{LogFormat, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logsieve",
    version,
    about = "logsieve: deduplicate and count game-engine log statements",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    parse: ParseArgs,

    /// Diagnostic output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Mirror diagnostics into this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse log files and print the report (default)
    Parse(ParseArgs),

    /// Config file tooling
    Conf {
        #[command(subcommand)]
        cmd: cli::conf::ConfCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let guard = match init_logging(cli.log_format, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("logging error: {e:#}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Command::Conf { cmd }) => cli::conf::run(cmd),
        Some(Command::Parse(args)) => run_parse(args).map(|_| ()),
        None => run_parse(cli.parse).map(|_| ()),
    };

    if let Err(e) = result {
        tracing::error!("logsieve error: {e:#}");
        // process::exit skips destructors; flush buffered diagnostics first.
        drop(guard);
        std::process::exit(1);
    }
}
