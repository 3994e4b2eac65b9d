//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::clamp_page_size;
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [dictionary] section
    if let Some(section) = ini.section(Some("dictionary")) {
        if let Some(v) = non_empty(section.get("path")) {
            config.dictionary.path = expand_tilde(v);
        }
    }

    // [premium] section
    if let Some(section) = ini.section(Some("premium")) {
        if let Some(v) = non_empty(section.get("journal")) {
            config.premium.journal = expand_tilde(v);
        }
    }

    // [listing] section
    if let Some(section) = ini.section(Some("listing")) {
        if let Some(v) = section.get("per_page") {
            let parsed = parse_count("listing", "per_page", v)?;
            config.listing.per_page = clamp_page_size("listing.per_page", parsed);
        }
        if let Some(v) = section.get("max_per_page") {
            let parsed = parse_count("listing", "max_per_page", v)?;
            config.listing.max_per_page = clamp_page_size("listing.max_per_page", parsed);
        }
        if config.listing.per_page > config.listing.max_per_page {
            tracing::warn!(
                per_page = config.listing.per_page,
                max_per_page = config.listing.max_per_page,
                "listing.per_page above listing.max_per_page, clamping to {}",
                config.listing.max_per_page
            );
            config.listing.per_page = config.listing.max_per_page;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = non_empty(section.get("file")) {
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(config)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_count(section: &str, key: &str, value: &str) -> Result<usize, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigFileError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            reason: "must be a positive integer".to_string(),
        })
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::*;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[dictionary]
path = /srv/geovocab/words.csv
"#,
        )
        .unwrap();

        assert_eq!(config.dictionary.path, PathBuf::from("/srv/geovocab/words.csv"));
        assert_eq!(config.premium.journal, default_premium_journal_path());
        assert_eq!(config.listing.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_all_sections() {
        let config = load(
            r#"
[dictionary]
path = /data/dictionary.csv

[premium]
journal = /data/premium.jsonl

[listing]
per_page = 25
max_per_page = 250

[logging]
file = /var/log/geovocab.log
"#,
        )
        .unwrap();

        assert_eq!(config.dictionary.path, PathBuf::from("/data/dictionary.csv"));
        assert_eq!(config.premium.journal, PathBuf::from("/data/premium.jsonl"));
        assert_eq!(config.listing.per_page, 25);
        assert_eq!(config.listing.max_per_page, 250);
        assert_eq!(config.logging.file, PathBuf::from("/var/log/geovocab.log"));
    }

    #[test]
    fn test_empty_path_keeps_default() {
        let config = load(
            r#"
[premium]
journal =
"#,
        )
        .unwrap();

        assert_eq!(config.premium.journal, default_premium_journal_path());
    }

    #[test]
    fn test_invalid_page_size() {
        let err = load(
            r#"
[listing]
per_page = lots
"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("listing.per_page"));
        assert!(err.to_string().contains("must be a positive integer"));
    }

    #[test]
    fn test_out_of_range_page_sizes_are_clamped() {
        let config = load(
            r#"
[listing]
per_page = 0
max_per_page = 999999
"#,
        )
        .unwrap();

        assert_eq!(config.listing.per_page, MIN_PER_PAGE);
        assert_eq!(config.listing.max_per_page, PER_PAGE_CEILING);
    }

    #[test]
    fn test_per_page_capped_by_max() {
        let config = load(
            r#"
[listing]
per_page = 500
max_per_page = 200
"#,
        )
        .unwrap();

        assert_eq!(config.listing.per_page, 200);
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
