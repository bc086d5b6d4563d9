mod edge_cases;
mod logging;
mod ui;

use crate::CONFIG_DIR_ENV;

use std::env;

use tempfile::TempDir;

/// Every variable `Config::load` reads on top of the config directory
const OVERRIDE_VARS: [&str; 8] = [
    "EP_API_BASE_URL",
    "EP_API_KEY",
    "EP_SESSION_FILE",
    "EP_LOG_LEVEL",
    "EP_LOG_COLORED",
    "EP_LOG_FILE",
    "EP_UI_NOTIFICATION_DURATION_MS",
    "EP_UI_MAX_NOTIFICATIONS",
];

/// Sets or unsets one environment variable until dropped.
/// Only use from `#[serial]` tests.
pub(crate) struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        Self::replace(key, Some(value))
    }

    pub(crate) fn unset(key: &'static str) -> Self {
        Self::replace(key, None)
    }

    fn replace(key: &'static str, value: Option<&str>) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            match value {
                Some(value) => env::set_var(key, value),
                None => env::remove_var(key),
            }
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.previous {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Empty config directory with every `EP_*` override cleared
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards: Vec<EnvGuard> = OVERRIDE_VARS.into_iter().map(EnvGuard::unset).collect();
    guards.push(EnvGuard::set(CONFIG_DIR_ENV, temp.path().to_str().unwrap()));
    (temp, guards)
}
