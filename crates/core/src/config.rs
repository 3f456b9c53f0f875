/// Configuration module for the Modern Window chrome.
///
/// This module provides the persisted settings record and the store that
/// reads and writes it:
/// - Remembering the last applied theme
/// - Remembering the last non-maximized window size
/// - Holding update-service and issue-tracker endpoints
/// - Persisting everything to disk as JSON
///
/// The record lives in an `app_config.json` file in the current working
/// directory. A missing file is replaced by the documented defaults on first
/// load; a corrupt file is reported and never overwritten.
///
/// # Example
///
/// ```no_run
/// use modern_window_core::config::ConfigStore;
///
/// let store = ConfigStore::new()?;
/// let mut record = store.load()?;
///
/// record.dark_theme = true;
/// store.save(&record)?;
/// # Ok::<(), modern_window_core::config::ConfigError>(())
/// ```
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the settings record, relative to the working directory
pub const CONFIG_FILE_NAME: &str = "app_config.json";

/// Persisted window preferences
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsRecord {
    /// Last applied theme
    pub dark_theme: bool,
    /// Whether to probe the update service for new versions
    pub check_for_update: bool,
    /// Update-service credentials
    pub token: String,
    /// Update-service endpoint
    pub url: String,
    /// Last non-maximized width (0 = toolkit default)
    pub width: i32,
    /// Last non-maximized height (0 = toolkit default)
    pub height: i32,
    /// Whether the window was maximized when it was last closed
    pub is_maximized: bool,
    /// Issue tracker endpoint (empty = reporting disabled)
    pub issues_url: String,
    /// Issue tracker credentials
    pub issues_token: String,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        SettingsRecord {
            dark_theme: false,
            check_for_update: true,
            token: String::new(),
            url: String::new(),
            width: 0,
            height: 0,
            is_maximized: false,
            issues_url: String::new(),
            issues_token: String::new(),
        }
    }
}

impl SettingsRecord {
    /// Stored window size, if both dimensions are set
    pub fn stored_size(&self) -> Option<(u32, u32)> {
        if self.width > 0 && self.height > 0 {
            Some((self.width as u32, self.height as u32))
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("settings file {path} is not a valid settings record: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode settings record: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to determine working directory: {0}")]
    WorkingDirectory(#[source] io::Error),
}

/// Reads and writes the settings record at a fixed path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store bound to `app_config.json` in the current working directory
    pub fn new() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().map_err(ConfigError::WorkingDirectory)?;
        Ok(Self::at(cwd.join(CONFIG_FILE_NAME)))
    }

    /// Store bound to an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings record.
    ///
    /// A missing file yields the defaults, which are written out before
    /// returning. A file that exists but does not decode is an error and is
    /// left untouched.
    pub fn load(&self) -> Result<SettingsRecord, ConfigError> {
        if !self.path.exists() {
            tracing::debug!("Settings file {:?} not found, creating defaults", self.path);
            let record = SettingsRecord::default();
            if let Err(e) = self.save(&record) {
                tracing::warn!("Failed to write default settings: {}", e);
            }
            return Ok(record);
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Save the full settings record, overwriting any existing file
    pub fn save(&self, record: &SettingsRecord) -> Result<(), ConfigError> {
        let json = encode(record)?;

        fs::write(&self.path, json).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Pretty-print with a four space indent
fn encode(record: &SettingsRecord) -> Result<Vec<u8>, ConfigError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser).map_err(ConfigError::Encode)?;
    Ok(buf)
}
