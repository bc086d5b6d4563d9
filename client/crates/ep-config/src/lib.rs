mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod ui_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use ui_config::{
    MAX_MAX_NOTIFICATIONS, MAX_NOTIFICATION_DURATION_MS, MIN_MAX_NOTIFICATIONS,
    MIN_NOTIFICATION_DURATION_MS, UiConfig,
};

const CONFIG_DIR_ENV: &str = "EP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ep";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";
const DEFAULT_API_KEY: &str = "reqres-free-v1";
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
