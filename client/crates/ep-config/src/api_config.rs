use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_BASE_URL, DEFAULT_API_KEY};

use serde::Deserialize;

/// Remote user API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (e.g. "https://reqres.in/api")
    pub base_url: String,
    /// Sent as `x-api-key` on every request when present
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_BASE_URL),
            api_key: Some(String::from(DEFAULT_API_KEY)),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::invalid("api.base_url", "must not be empty"));
        }

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "api.base_url",
                format!("must start with http:// or https://, got {}", self.base_url),
            ));
        }

        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::invalid("api.api_key", "must not be blank when set"));
        }

        Ok(())
    }
}
