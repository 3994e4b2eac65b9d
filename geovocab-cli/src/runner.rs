//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and service
//! creation so store-backed commands share one startup path.

use crate::error::CliError;
use geovocab::config::{config_file_path, ConfigFile};
use geovocab::log::TracingLogger;
use geovocab::logging::{init_logging, split_log_path, LoggingGuard};
use geovocab::service::{GeoVocabService, ServiceConfig};
use geovocab::store::{Dictionary, MemoryStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Resolve the config file path from the `--config` flag.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Load configuration, falling back to defaults when the file is absent.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match explicit {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

/// Save configuration to the `--config` path or the default location.
pub fn save_config(config: &ConfigFile, explicit: Option<&Path>) -> Result<(), CliError> {
    match explicit {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    Ok(())
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file override from `--config`
    /// * `debug_mode` - Debug-level logging mirrored to stderr
    pub fn new(config_path: Option<&Path>, debug_mode: bool) -> Result<Self, CliError> {
        let config = load_config(config_path)?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let logging_guard = init_logging(&log_dir, &log_file, debug_mode, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("GeoVocab v{}", geovocab::VERSION);
        info!("GeoVocab CLI: {} command", command);
    }

    /// Load the dictionary, replay the premium journal and build the service.
    pub fn create_service(&self) -> Result<GeoVocabService, CliError> {
        let dictionary_path = &self.config.dictionary.path;
        let dictionary =
            Dictionary::load(dictionary_path).map_err(|error| CliError::Dictionary {
                path: dictionary_path.clone(),
                error,
            })?;

        let store = MemoryStore::with_journal(dictionary, &self.config.premium.journal)?;

        let logger = Arc::new(TracingLogger::for_component("service"));
        let service_config = ServiceConfig::from(&self.config.listing);

        info!(
            journal = %self.config.premium.journal.display(),
            "Service created successfully"
        );
        Ok(GeoVocabService::new(Arc::new(store), service_config, logger))
    }
}
