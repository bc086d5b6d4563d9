use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, SessionConfig, UiConfig,
};

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for EP_CONFIG_DIR env var, else use ./.ep/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply EP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::io(&config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::toml(path, e))
    }

    /// Get the config directory.
    /// Priority: EP_CONFIG_DIR env var > ./.ep/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(ConfigError::working_dir)?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Absolute path of the persisted session token.
    pub fn session_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.session.file))
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(filename),
            )),
            None => Ok(None),
        }
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.ui.notification_duration_ms)
    }

    /// Log configuration summary (never logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (api key: {})",
            self.api.base_url,
            if self.api.api_key.is_some() {
                "set"
            } else {
                "none"
            }
        );
        info!("  session: {}", self.session.file);
        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
        info!(
            "  ui: notifications={} for {}ms",
            self.ui.max_notifications, self.ui.notification_duration_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("EP_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_option_string("EP_API_KEY", &mut self.api.api_key);

        // Session
        Self::apply_env_string("EP_SESSION_FILE", &mut self.session.file);

        // Logging
        Self::apply_env_parse("EP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("EP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("EP_LOG_FILE", &mut self.logging.file);

        // Ui
        Self::apply_env_parse(
            "EP_UI_NOTIFICATION_DURATION_MS",
            &mut self.ui.notification_duration_ms,
        );
        Self::apply_env_parse("EP_UI_MAX_NOTIFICATIONS", &mut self.ui.max_notifications);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}
