//! Settings file I/O

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{env, settings as settings_config};
use crate::error::IonosError;

use super::models::ConfigFile;

/// Handles reading and writing the settings file
pub struct SettingsStore {
    config_path: PathBuf,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore {
    /// Create a new store using the default path (~/.ionosctl/config.json)
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a store with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Pick the settings file: --config flag, then IONOS_CONFIG_FILE, then default
    pub fn resolve(cli_path: Option<&Path>) -> Self {
        if let Some(path) = cli_path {
            debug!("Using config file from CLI flag: {}", path.display());
            return Self::with_path(path.to_path_buf());
        }
        if let Ok(path) = std::env::var(env::CONFIG_FILE) {
            if !path.is_empty() {
                debug!("Using config file from {}: {}", env::CONFIG_FILE, path);
                return Self::with_path(PathBuf::from(path));
            }
        }
        Self::new()
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(settings_config::DIR_NAME)
            .join(settings_config::FILE_NAME)
    }

    /// Load the settings file from disk.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(&self) -> Result<ConfigFile, IonosError> {
        if !self.config_path.exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            IonosError::Config(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            IonosError::Config(format!(
                "Failed to parse config file {}: {}",
                self.config_path.display(),
                e
            ))
        })
    }

    /// Save the settings file atomically (tmp file + rename), creating the
    /// parent directory if needed.
    pub fn save(&self, config: &ConfigFile) -> Result<(), IonosError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                IonosError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|e| IonosError::Config(format!("Failed to serialize config: {}", e)))?;

        let tmp_path = self.config_path.with_extension("json.tmp");
        write_private(&tmp_path, json.as_bytes()).map_err(|e| {
            IonosError::Config(format!(
                "Failed to write temp config file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        fs::rename(&tmp_path, &self.config_path).map_err(|e| {
            IonosError::Config(format!(
                "Failed to rename temp config file to {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

/// Write `contents` to a file only the owner can read
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies to newly created files
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}
