// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for preference directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to the `_with_override()` functions (CLI flags, tests)
//! 2. **Environment variables** (`WEBUI_PREFS_DATA_DIR`, `WEBUI_PREFS_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate, with the application name appended
//!
//! The config directory holds the user-editable `settings.toml`. The data
//! directory holds `preferences.toml`, the key-value store backing the theme toggle.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "WebUiPrefs";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "WEBUI_PREFS_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "WEBUI_PREFS_CONFIG_DIR";

/// Returns the application data directory path.
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_DATA_DIR, dirs::data_dir())
}

/// Returns the application config directory path.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, ENV_CONFIG_DIR, dirs::config_dir())
}

fn resolve(
    override_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
