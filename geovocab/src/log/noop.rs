//! Silent logger.

use crate::log::{LogLevel, Logger};
use std::fmt::Arguments;

/// Drops every line.
///
/// For embedding [`GeoVocabService`](crate::service::GeoVocabService) in a
/// program that has no tracing subscriber, and for doc examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::{GeoVocabService, ServiceConfig};
    use crate::store::{Dictionary, MemoryStore};
    use std::sync::Arc;

    #[test]
    fn test_service_runs_with_silent_logger() {
        let store = MemoryStore::new(Dictionary::from_pairs([("9q8", "apple")]));
        let service = GeoVocabService::new(
            Arc::new(store),
            ServiceConfig::default(),
            Arc::new(NoOpLogger),
        );

        // Rejections and lookups still answer; nothing is recorded anywhere
        assert_eq!(service.words_for_coordinates("200", "0").status, 400);
        assert_eq!(service.find_segment("9q8").status, 200);
    }
}
