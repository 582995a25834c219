mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "VV_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".vv";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORAGE_DIR: &str = "session";
const DEFAULT_STORAGE_KEY: &str = "virtualIcuUser";
const MAX_STORAGE_KEY_LENGTH: usize = 128;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
