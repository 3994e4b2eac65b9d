//! Tracing library adapter implementation.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Component name used when none is given.
const DEFAULT_COMPONENT: &str = "geovocab";

/// Logger implementation that delegates to the `tracing` crate.
///
/// Every event carries a `component` field so lines from the service facade
/// can be told apart from store bootstrap in the shared log file. Messages go
/// to whatever subscriber [`init_logging`](crate::logging::init_logging)
/// installed.
#[derive(Debug, Clone, Copy)]
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    /// Create an adapter tagged with the default component.
    pub fn new() -> Self {
        Self::for_component(DEFAULT_COMPONENT)
    }

    /// Create an adapter whose events are tagged with `component`.
    pub fn for_component(component: &'static str) -> Self {
        Self { component }
    }

    /// Component name attached to every event.
    pub fn component(&self) -> &'static str {
        self.component
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let component = self.component;
        match level {
            LogLevel::Trace => tracing::trace!(component, "{}", args),
            LogLevel::Debug => tracing::debug!(component, "{}", args),
            LogLevel::Info => tracing::info!(component, "{}", args),
            LogLevel::Warn => tracing::warn!(component, "{}", args),
            LogLevel::Error => tracing::error!(component, "{}", args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingLogger>();
    }

    #[test]
    fn test_default_component() {
        assert_eq!(TracingLogger::default().component(), "geovocab");
        assert_eq!(
            TracingLogger::for_component("service").component(),
            "service"
        );
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        let logger: Box<dyn Logger> = Box::new(TracingLogger::for_component("service"));
        logger.info(format_args!("dropped without a subscriber"));
    }
}
