mod config;
mod error;
mod log_level;
mod logging_config;
mod provider_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use provider_config::ProviderConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "LN_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR_NAME: &str = ".ln";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_PROVIDER_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;
pub const MIN_PROVIDER_TIMEOUT_SECS: u64 = 1;
pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_PROVIDER_SESSION_KEY: &str = "providerSession";

pub const DEFAULT_STORAGE_DIR: &str = "data";
pub const DEFAULT_DEMO_USER_KEY: &str = "demoUser";

pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_DIRECTORY: &str = "log";
pub const DEFAULT_LOG_COLORED: bool = true;
