//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    format!(
        r#"[dictionary]
; Segment-to-word dictionary, one "segment,word" pair per line.
; Lines starting with '#' and a "hashVal,word" header are ignored.
path = {}

[premium]
; Append-only journal of premium phrases (JSON lines).
; Replayed on startup; registrations are appended as they happen.
journal = {}

[listing]
; Page size for segment listings when none is requested (default: 100)
per_page = {}
; Largest page size a caller may request (default: 1000, ceiling: 10000)
max_per_page = {}

[logging]
; Log file path. The file is truncated at the start of every run.
file = {}
"#,
        path_to_string(&config.dictionary.path),
        path_to_string(&config.premium.journal),
        config.listing.per_page,
        config.listing.max_per_page,
        path_to_string(&config.logging.file),
    )
}

/// Collapse the home directory to `~` so the file stays portable.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");

        let mut config = ConfigFile::default();
        config.dictionary.path = PathBuf::from("/data/words.csv");
        config.premium.journal = PathBuf::from("/data/premium.jsonl");
        config.listing.per_page = 20;
        config.listing.max_per_page = 40;

        config.save_to(&config_path).unwrap();
        let loaded = ConfigFile::load_from(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_output_uses_tilde() {
        let content = to_config_string(&ConfigFile::default());

        if dirs::home_dir().is_some() {
            assert!(content.contains("path = ~/.geovocab/dictionary.csv"));
            assert!(content.contains("journal = ~/.geovocab/premium.jsonl"));
            assert!(content.contains("file = ~/.geovocab/logs/geovocab.log"));
        }
        assert!(content.contains("per_page = 100"));
        assert!(content.contains("max_per_page = 1000"));
    }

    #[test]
    fn test_path_to_string_outside_home() {
        assert_eq!(path_to_string(Path::new("/tmp/x.csv")), "/tmp/x.csv");
    }
}
