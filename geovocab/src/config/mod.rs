//! Configuration for GeoVocab.
//!
//! User settings live in `~/.geovocab/config.ini`:
//!
//! - `[dictionary]` where the segment-to-word dictionary is read from
//! - `[premium]` where premium registrations are journaled
//! - `[listing]` page sizes for segment listings
//! - `[logging]` the log file
//!
//! # Example
//!
//! ```
//! use geovocab::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! ConfigKey::ListingPerPage.set(&mut config, "50").unwrap();
//!
//! assert_eq!(ConfigKey::ListingPerPage.get(&config), "50");
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_dictionary_path, default_log_file_path, default_premium_journal_path,
    DEFAULT_DICTIONARY_FILE, DEFAULT_LOG_FILE, DEFAULT_MAX_PER_PAGE, DEFAULT_PER_PAGE,
    DEFAULT_PREMIUM_JOURNAL_FILE, MIN_PER_PAGE, PER_PAGE_CEILING,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{
    ConfigFile, DictionarySettings, ListingSettings, LoggingSettings, PremiumSettings,
};
