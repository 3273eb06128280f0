mod error;
mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_or_default, validate_config};
pub use types::LogsieveConfig;
