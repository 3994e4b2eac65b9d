//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    /// Dictionary settings
    pub dictionary: DictionarySettings,
    /// Premium mapping settings
    pub premium: PremiumSettings,
    /// Segment listing settings
    pub listing: ListingSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Dictionary configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySettings {
    /// Path to the `segment,word` dictionary file
    pub path: PathBuf,
}

/// Premium mapping configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumSettings {
    /// Path to the append-only premium journal
    pub journal: PathBuf,
}

/// Segment listing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSettings {
    /// Page size used when none is requested
    pub per_page: usize,
    /// Largest page size a caller may request
    pub max_per_page: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
