use crate::conf::{ConfigError, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ mode: {:?}", cfg.aggregation_mode());
            match &cfg.folder {
                Some(folder) => println!("✔ log folder: {}", folder.display()),
                None => println!("✔ log folder: <current directory>"),
            }
            println!(
                "✔ type filter: {} allowed, {} denied{}",
                cfg.filter.severity.whitelist.len(),
                cfg.filter.severity.blacklist.len(),
                if cfg.filter.severity.ignore { " (ignored)" } else { "" }
            );
            println!(
                "✔ category filter: {} allowed, {} denied{}",
                cfg.filter.category.whitelist.len(),
                cfg.filter.category.blacklist.len(),
                if cfg.filter.category.ignore { " (ignored)" } else { "" }
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(hint) = config_error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ConflictingFilter { .. } => Some(
            "A value cannot be on both the whitelist and the blacklist of the same filter.\n\
             \n\
             Example:\n\
             \n\
             [filter.category]\n\
             whitelist = [\"Core\", \"Net\"]\n\
             blacklist = [\"Temp\"]",
        ),

        ConfigError::InvalidFolder { .. } => Some(
            "`folder` must point at a directory containing .log files.\n\
             \n\
             Example:\n\
             \n\
             folder = \"Saved/Logs\"",
        ),

        ConfigError::Parse { .. } => Some(
            "Run `logsieve conf init` to write a commented starter config.",
        ),

        _ => None,
    }
}
