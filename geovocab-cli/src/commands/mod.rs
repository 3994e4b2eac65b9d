//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`lookup`] - Store-backed lookups (words, locate, premium, segment, list, health)
//! - [`codec`] - Geohash encode and decode without a store
//! - [`config`] - Configuration management (get, set, list, path)

pub mod codec;
pub mod common;
pub mod config;
pub mod lookup;
