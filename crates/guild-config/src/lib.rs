mod config;
mod datalayer_config;
mod error;
mod log_level;
mod logging_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use datalayer_config::DataLayerConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

pub const DEFAULT_DATALAYER_URL: &str = "http://127.0.0.1:3000";
/// Store holding the guild's profile records
pub const DEFAULT_STORE_ID: &str =
    "7d4c2f19a6e83b50c1f9d27e4a6b8c03f5e1d9a2b7c46e08f3a1d5c9b2e7f406";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

pub(crate) const CONFIG_DIR_ENV: &str = "GUILD_CONFIG_DIR";
pub(crate) const CONFIG_DIR_NAME: &str = ".guild";
pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";
