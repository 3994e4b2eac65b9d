//! Reading and writing `~/.geovocab/config.ini`.
//!
//! A missing file is not an error: the service runs on defaults until
//! `geovocab config set` writes the first value. Saves go through a sibling
//! temporary file and a rename, so an interrupted write leaves the previous
//! file intact.

use ini::Ini;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::parser::parse_ini;
use super::settings::ConfigFile;
use super::writer::to_config_string;

/// Name of the config file inside [`config_directory`].
const CONFIG_FILE_NAME: &str = "config.ini";

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    #[error("Failed to write config file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value that cannot be used even after clamping
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load `~/.geovocab/config.ini`, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load the config at `path`, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        parse_ini(&Ini::load_from_file(path)?)
    }

    /// Save to `~/.geovocab/config.ini`.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save to `path`, creating its directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
            }
        }

        let staging = staging_path(path);
        let write_error = |source| ConfigFileError::WriteError {
            path: path.to_path_buf(),
            source,
        };
        fs::write(&staging, to_config_string(self)).map_err(write_error)?;
        fs::rename(&staging, path).map_err(|source| {
            let _ = fs::remove_file(&staging);
            write_error(source)
        })
    }
}

/// `config.ini` → `config.ini.tmp`, in the same directory so the rename
/// stays on one filesystem.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| CONFIG_FILE_NAME.into());
    name.push(".tmp");
    path.with_file_name(name)
}

/// GeoVocab home directory (`~/.geovocab`).
///
/// Falls back to `./.geovocab` when no home directory is known.
pub fn config_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".geovocab")
}

/// Default config file location (`~/.geovocab/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_directory().join(CONFIG_FILE_NAME)
}
