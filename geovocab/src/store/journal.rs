//! Append-only persistence for premium mappings.
//!
//! Each registration is written as one JSON object per line:
//!
//! ```text
//! {"geoHash":"9q8yyk8yt","magicwords":"golden-gate-view"}
//! ```
//!
//! The journal is replayed on startup to rebuild the premium index.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::types::{PremiumMapping, StoreError};

/// Append-only premium mapping journal.
#[derive(Debug)]
pub struct PremiumJournal {
    path: PathBuf,
    file: Mutex<File>,
}

impl PremiumJournal {
    /// Open (or create) a journal and return the mappings it already holds.
    ///
    /// Creates the parent directory if needed. Entries are returned in the
    /// order they were written.
    pub fn open(path: impl AsRef<Path>) -> Result<(Self, Vec<PremiumMapping>), StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let existing = if path.exists() {
            read_entries(&path)?
        } else {
            Vec::new()
        };

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok((
            Self {
                path,
                file: Mutex::new(file),
            },
            existing,
        ))
    }

    /// Append one mapping and flush it to disk.
    pub fn append(&self, mapping: &PremiumMapping) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(mapping).map_err(|e| StoreError::MalformedEntry {
            line: 0,
            message: e.to_string(),
        })?;
        line.push('\n');

        let mut file = self
            .file
            .lock()
            .map_err(|_| StoreError::Unavailable("premium journal lock poisoned".to_string()))?;
        file.write_all(line.as_bytes())?;
        file.sync_data()?;
        Ok(())
    }

    /// Location of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_entries(path: &Path) -> Result<Vec<PremiumMapping>, StoreError> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mapping: PremiumMapping =
            serde_json::from_str(&line).map_err(|e| StoreError::MalformedEntry {
                line: index + 1,
                message: e.to_string(),
            })?;
        entries.push(mapping);
    }

    Ok(entries)
}
