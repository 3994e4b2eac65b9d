//! Logging abstraction layer.
//!
//! The service facade logs through the [`Logger`] trait instead of calling
//! `tracing` directly, so tests can swap in a silent or recording logger.
//! The resolver and store core do not log through it.
//!
//! # Usage
//!
//! ```
//! use geovocab::log::{Logger, NoOpLogger};
//! use geovocab::{log_debug, log_info};
//! use std::sync::Arc;
//!
//! struct Registrar {
//!     logger: Arc<dyn Logger>,
//! }
//!
//! impl Registrar {
//!     fn register(&self, geohash: &str) {
//!         log_info!(self.logger, "Registering {}", geohash);
//!         log_debug!(self.logger, "Registered {}", geohash);
//!     }
//! }
//!
//! Registrar { logger: Arc::new(NoOpLogger) }.register("9q8yyk8yt");
//! ```

mod noop;
mod recording;
mod tracing_adapter;
mod r#trait;

pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use recording::RecordingLogger;
pub use tracing_adapter::TracingLogger;
