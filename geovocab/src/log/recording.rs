//! Logger that keeps messages in memory.

use std::fmt::Arguments;
use std::sync::Mutex;

use crate::log::{LogLevel, Logger};

/// A logger that records every message.
///
/// Lets tests assert on what a component logged without installing a
/// global subscriber.
///
/// # Example
///
/// ```
/// use geovocab::log::{LogLevel, Logger, RecordingLogger};
/// use geovocab::log_info;
///
/// let logger = RecordingLogger::new();
/// log_info!(logger, "Loaded {} words", 3);
///
/// assert_eq!(logger.entries(), vec![(LogLevel::Info, "Loaded 3 words".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingLogger {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded messages in order.
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages recorded at `level`.
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        let message = args.to_string();
        match self.entries.lock() {
            Ok(mut entries) => entries.push((level, message)),
            Err(poisoned) => poisoned.into_inner().push((level, message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let logger = RecordingLogger::new();
        logger.debug(format_args!("first"));
        logger.warn(format_args!("second {}", 2));

        assert_eq!(
            logger.entries(),
            vec![
                (LogLevel::Debug, "first".to_string()),
                (LogLevel::Warn, "second 2".to_string()),
            ]
        );
        assert_eq!(logger.messages_at(LogLevel::Warn), vec!["second 2"]);
        assert!(logger.messages_at(LogLevel::Error).is_empty());
    }
}
