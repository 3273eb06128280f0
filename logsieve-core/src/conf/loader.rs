use crate::conf::error::ConfigError;
use crate::conf::types::LogsieveConfig;
use crate::logs::FieldFilter;
use std::fs;
use std::io;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "logsieve.toml";

pub fn load_config(path: &Path) -> Result<LogsieveConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let config: LogsieveConfig =
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&config)?;
    Ok(config)
}

/// Loads `path` when given, otherwise the default config file if one exists.
///
/// A missing default file yields the built-in defaults; a missing explicit path is an error.
pub fn load_or_default(path: Option<&Path>) -> Result<LogsieveConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => match load_config(Path::new(DEFAULT_CONFIG_FILE)) {
            Err(ConfigError::ReadFile { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(LogsieveConfig::default())
            }
            other => other,
        },
    }
}

pub fn validate_config(config: &LogsieveConfig) -> Result<(), ConfigError> {
    if let Some(folder) = &config.folder {
        if folder.exists() && !folder.is_dir() {
            return Err(ConfigError::InvalidFolder {
                path: folder.clone(),
            });
        }
    }

    let filters = [
        ("type", Some(&config.filter.severity)),
        ("category", Some(&config.filter.category)),
        ("category_breakdown", config.filter.category_breakdown.as_ref()),
    ];

    for (field, filter) in filters {
        check_filter(field, filter)?;
    }

    Ok(())
}

fn check_filter(field: &str, filter: Option<&FieldFilter>) -> Result<(), ConfigError> {
    let Some(filter) = filter else {
        return Ok(());
    };

    match filter.conflicting_values().first() {
        Some(value) => Err(ConfigError::ConflictingFilter {
            field: field.to_string(),
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}
