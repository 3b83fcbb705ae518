// SPDX-License-Identifier: MPL-2.0
//! TOML-backed preference store.
//!
//! Values live in a flat TOML table. Every `set` rewrites the whole file so a
//! toggle is on disk before the call returns.

use super::PreferenceStore;
use crate::error::{Error, Result};
use crate::paths;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Store file name within the app data directory.
const STORE_FILE: &str = "preferences.toml";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store in the default data directory.
    ///
    /// Returns `None` when no data directory can be determined.
    pub fn open_default() -> Option<(Self, Option<String>)> {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, or in the default data directory when `None`.
    pub fn open_in(base_dir: Option<PathBuf>) -> Option<(Self, Option<String>)> {
        paths::get_app_data_dir_with_override(base_dir).map(|dir| Self::open(dir.join(STORE_FILE)))
    }

    /// Opens the store at `path`.
    ///
    /// Returns a tuple of (store, optional_warning). A missing file yields an
    /// empty store. An unreadable or malformed file also yields an empty store,
    /// with a warning message key; the file is replaced on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<String>) {
        let path = path.into();
        if !path.exists() {
            return (Self::empty(path), None);
        }

        match read_values(&path) {
            Ok(values) => (Self { path, values }, None),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "ignoring unreadable preference store"
                );
                (
                    Self::empty(path),
                    Some("notification-store-read-error".to_string()),
                )
            }
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            values: BTreeMap::new(),
        }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values).map_err(Error::from)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

fn read_values(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
