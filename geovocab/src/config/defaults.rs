//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants, clamping helpers,
//! and the per-section `Default` implementations.

use std::path::PathBuf;

use super::file::config_directory;
use super::settings::*;

/// Default dictionary file name inside the config directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.csv";

/// Default premium journal file name inside the config directory.
pub const DEFAULT_PREMIUM_JOURNAL_FILE: &str = "premium.jsonl";

/// Default log file name inside `<config dir>/logs`.
pub const DEFAULT_LOG_FILE: &str = "geovocab.log";

/// Default page size for segment listings.
pub const DEFAULT_PER_PAGE: usize = 100;

/// Default cap on the requested page size.
pub const DEFAULT_MAX_PER_PAGE: usize = 1000;

/// Smallest accepted page size.
pub const MIN_PER_PAGE: usize = 1;

/// Hard ceiling for `listing.max_per_page`.
pub const PER_PAGE_CEILING: usize = 10_000;

/// Default dictionary path (~/.geovocab/dictionary.csv).
pub fn default_dictionary_path() -> PathBuf {
    config_directory().join(DEFAULT_DICTIONARY_FILE)
}

/// Default premium journal path (~/.geovocab/premium.jsonl).
pub fn default_premium_journal_path() -> PathBuf {
    config_directory().join(DEFAULT_PREMIUM_JOURNAL_FILE)
}

/// Default log file path (~/.geovocab/logs/geovocab.log).
pub fn default_log_file_path() -> PathBuf {
    config_directory().join("logs").join(DEFAULT_LOG_FILE)
}

/// Clamps a page size setting to its valid range and logs a warning if clamped.
pub(super) fn clamp_page_size(key: &str, value: usize) -> usize {
    if value < MIN_PER_PAGE {
        tracing::warn!(
            key,
            requested = value,
            min = MIN_PER_PAGE,
            "{} below minimum, clamping to {}",
            key,
            MIN_PER_PAGE
        );
        MIN_PER_PAGE
    } else if value > PER_PAGE_CEILING {
        tracing::warn!(
            key,
            requested = value,
            max = PER_PAGE_CEILING,
            "{} above maximum, clamping to {}",
            key,
            PER_PAGE_CEILING
        );
        PER_PAGE_CEILING
    } else {
        value
    }
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
        }
    }
}

impl Default for PremiumSettings {
    fn default() -> Self {
        Self {
            journal: default_premium_journal_path(),
        }
    }
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: default_log_file_path(),
        }
    }
}
