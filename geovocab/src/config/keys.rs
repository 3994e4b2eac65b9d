//! Configuration key access and validation.
//!
//! `geovocab config get/set` address settings as `section.key` names. Each
//! key carries a value check (page size range or non-empty path) that runs
//! before the value is written.

use std::str::FromStr;
use thiserror::Error;

use super::defaults::{MIN_PER_PAGE, PER_PAGE_CEILING};
use super::parser::expand_tilde;
use super::settings::ConfigFile;
use super::writer::path_to_string;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DictionaryPath,
    PremiumJournal,
    ListingPerPage,
    ListingMaxPerPage,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "listing.per_page").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::DictionaryPath => "dictionary.path",
            ConfigKey::PremiumJournal => "premium.journal",
            ConfigKey::ListingPerPage => "listing.per_page",
            ConfigKey::ListingMaxPerPage => "listing.max_per_page",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "listing").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "per_page").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::DictionaryPath => path_to_string(&config.dictionary.path),
            ConfigKey::PremiumJournal => path_to_string(&config.premium.journal),
            ConfigKey::ListingPerPage => config.listing.per_page.to_string(),
            ConfigKey::ListingMaxPerPage => config.listing.max_per_page.to_string(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
        }
    }

    /// Check `value` and store it in `config`.
    ///
    /// Paths get `~` expanded; page sizes are stored as parsed.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        self.set_unchecked(config, value.trim());
        Ok(())
    }

    /// Store an already checked value.
    fn set_unchecked(&self, config: &mut ConfigFile, value: &str) {
        match self {
            ConfigKey::DictionaryPath => config.dictionary.path = expand_tilde(value),
            ConfigKey::PremiumJournal => config.premium.journal = expand_tilde(value),
            ConfigKey::ListingPerPage => {
                if let Ok(v) = value.parse() {
                    config.listing.per_page = v;
                }
            }
            ConfigKey::ListingMaxPerPage => {
                if let Ok(v) = value.parse() {
                    config.listing.max_per_page = v;
                }
            }
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
    }

    /// Validate a value for this key without setting it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.value_check()
            .check(value.trim())
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    fn value_check(&self) -> &'static dyn ValueCheck {
        match self {
            ConfigKey::DictionaryPath | ConfigKey::PremiumJournal | ConfigKey::LoggingFile => {
                &PathCheck
            }
            ConfigKey::ListingPerPage | ConfigKey::ListingMaxPerPage => &PageSizeCheck,
        }
    }

    /// Get all supported configuration keys.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::DictionaryPath,
            ConfigKey::PremiumJournal,
            ConfigKey::ListingPerPage,
            ConfigKey::ListingMaxPerPage,
            ConfigKey::LoggingFile,
        ]
    }
}

/// Accepts or rejects a raw `config set` value, with the reason on rejection.
trait ValueCheck: Sync {
    fn check(&self, value: &str) -> Result<(), String>;
}

/// Listing page sizes: an integer in `MIN_PER_PAGE..=PER_PAGE_CEILING`.
struct PageSizeCheck;

impl ValueCheck for PageSizeCheck {
    fn check(&self, value: &str) -> Result<(), String> {
        let reason = || {
            format!(
                "must be an integer between {} and {}",
                MIN_PER_PAGE, PER_PAGE_CEILING
            )
        };
        let n: usize = value.parse().map_err(|_| reason())?;
        if (MIN_PER_PAGE..=PER_PAGE_CEILING).contains(&n) {
            Ok(())
        } else {
            Err(reason())
        }
    }
}

/// Dictionary, journal and log file locations: any non-empty path.
struct PathCheck;

impl ValueCheck for PathCheck {
    fn check(&self, value: &str) -> Result<(), String> {
        if value.trim().is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}
