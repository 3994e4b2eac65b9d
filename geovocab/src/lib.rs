//! GeoVocab - three-word addresses for geographic coordinates
//!
//! Every point on Earth is encoded as a 9-character geohash, split into
//! three 3-character segments, and each segment is mapped to a dictionary
//! word. The phrase `word1-word2-word3` names a cell of roughly 5 m x 5 m.
//! Premium phrases can be registered for individual cells and take
//! precedence over the composed phrase.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```
//! use std::sync::Arc;
//! use geovocab::log::NoOpLogger;
//! use geovocab::service::{GeoVocabService, ServiceConfig};
//! use geovocab::store::{Dictionary, MemoryStore};
//!
//! let dictionary = Dictionary::from_pairs([
//!     ("9q8", "apple"),
//!     ("yyk", "river"),
//!     ("8yt", "canyon"),
//! ]);
//! let service = GeoVocabService::new(
//!     Arc::new(MemoryStore::new(dictionary)),
//!     ServiceConfig::default(),
//!     Arc::new(NoOpLogger),
//! );
//!
//! let response = service.location_for_words("apple-river-canyon");
//! assert_eq!(response.data.unwrap().geohash, "9q8yyk8yt");
//! ```

pub mod config;
pub mod geohash;
pub mod log;
pub mod logging;
pub mod segment;
pub mod service;
pub mod store;
pub mod validation;
pub mod vocab;

/// Version of the GeoVocab library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
