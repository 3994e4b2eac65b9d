//! High-level service facade for GeoVocab operations.
//!
//! Wraps the [`PhraseResolver`](crate::vocab::PhraseResolver) and its store
//! behind string-in, envelope-out operations, the shape a request handler
//! or the CLI consumes directly.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use geovocab::log::NoOpLogger;
//! use geovocab::service::{GeoVocabService, ServiceConfig};
//! use geovocab::store::{Dictionary, MemoryStore};
//!
//! let store = Arc::new(MemoryStore::new(Dictionary::new()));
//! let service = GeoVocabService::new(store, ServiceConfig::default(), Arc::new(NoOpLogger));
//!
//! let response = service.find_segment("9q8");
//! assert_eq!(response.status, 404);
//! ```

mod config;
mod envelope;
mod facade;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use envelope::{DatabaseHealth, Envelope, HealthReport, Pagination, SegmentPage};
pub use facade::GeoVocabService;
