//! GeoVocab service facade implementation.

use std::sync::Arc;

use super::config::ServiceConfig;
use super::envelope::{Envelope, HealthReport, Pagination, SegmentPage};
use crate::geohash::{MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};
use crate::log::Logger;
use crate::store::{LookupStore, PremiumMapping, WordMapping};
use crate::validation::parse_in_range;
use crate::vocab::{Location, PhraseResolver, VocabError};
use crate::{log_debug, log_error, log_info};

const WORDS_FOUND: &str = "Here's the 3 magic words to your location";
const LOCATION_FOUND: &str = "Here's the location pointed by your 3 magic words";
const PREMIUM_ADDED: &str = "Successfully added a premium GeoVocab";
const SEGMENT_FOUND: &str = "Found";
const INVALID_LATITUDE: &str = "Invalid Latitude";
const INVALID_LONGITUDE: &str = "Invalid Longitude";

/// High-level facade over the resolver and its store.
///
/// Takes raw string inputs as a request handler would receive them and
/// answers with an [`Envelope`]. Never panics on bad input; every failure
/// becomes a status code and message.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use geovocab::log::NoOpLogger;
/// use geovocab::service::{GeoVocabService, ServiceConfig};
/// use geovocab::store::{Dictionary, MemoryStore};
///
/// let dictionary = Dictionary::from_pairs([
///     ("9q8", "apple"),
///     ("yyk", "river"),
///     ("8yt", "canyon"),
/// ]);
/// let service = GeoVocabService::new(
///     Arc::new(MemoryStore::new(dictionary)),
///     ServiceConfig::default(),
///     Arc::new(NoOpLogger),
/// );
///
/// let response = service.words_for_coordinates("37.7749", "-122.4194");
/// assert_eq!(response.status, 200);
/// assert_eq!(response.data.unwrap().phrase, "apple-river-canyon");
/// ```
pub struct GeoVocabService {
    resolver: PhraseResolver,
    config: ServiceConfig,
    logger: Arc<dyn Logger>,
}

impl GeoVocabService {
    /// Create a service over a store.
    pub fn new(
        store: Arc<dyn LookupStore>,
        config: ServiceConfig,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            resolver: PhraseResolver::new(store),
            config,
            logger,
        }
    }

    /// The service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &PhraseResolver {
        &self.resolver
    }

    fn store(&self) -> &Arc<dyn LookupStore> {
        self.resolver.store()
    }

    /// Three words for a coordinate given as strings.
    pub fn words_for_coordinates(&self, lat: &str, lon: &str) -> Envelope<Location> {
        let Some(lat) = parse_in_range(lat, MIN_LAT, MAX_LAT) else {
            return Envelope::failure(400, INVALID_LATITUDE);
        };
        let Some(lon) = parse_in_range(lon, MIN_LON, MAX_LON) else {
            return Envelope::failure(400, INVALID_LONGITUDE);
        };

        match self.resolver.coordinates_to_phrase(lat, lon) {
            Ok(location) => {
                log_debug!(
                    self.logger,
                    "Resolved ({}, {}) to {} via {}",
                    lat,
                    lon,
                    location.phrase,
                    location.geohash
                );
                Envelope::ok(WORDS_FOUND, location)
            }
            Err(e) => self.failed("words lookup", e),
        }
    }

    /// Coordinate for a dash-delimited phrase.
    pub fn location_for_words(&self, words: &str) -> Envelope<Location> {
        match self.resolver.phrase_to_coordinates(words.trim()) {
            Ok(location) => {
                log_debug!(self.logger, "Resolved {} to {}", location.phrase, location.geohash);
                Envelope::ok(LOCATION_FOUND, location)
            }
            Err(e) => self.failed("location lookup", e),
        }
    }

    /// Register a premium phrase for a 9-character geohash.
    ///
    /// Surrounding whitespace is ignored on both inputs.
    pub fn register_premium(&self, geohash: &str, phrase: &str) -> Envelope<PremiumMapping> {
        match self.resolver.register_premium(geohash.trim(), phrase.trim()) {
            Ok(mapping) => {
                log_info!(
                    self.logger,
                    "Registered premium {} for {}",
                    mapping.phrase,
                    mapping.geohash
                );
                Envelope::ok(PREMIUM_ADDED, mapping)
            }
            Err(e) => self.failed("premium registration", e),
        }
    }

    /// Word assigned to a single segment.
    pub fn find_segment(&self, segment: &str) -> Envelope<WordMapping> {
        let segment = segment.trim().to_ascii_lowercase();
        match self.store().word_by_segment(&segment) {
            Ok(Some(word)) => Envelope::ok(SEGMENT_FOUND, WordMapping::new(segment, word)),
            Ok(None) => Envelope::failure(404, format!("No word found for geohash '{}'", segment)),
            Err(e) => self.failed("segment lookup", e.into()),
        }
    }

    /// One page of ordinary mappings ordered by segment.
    ///
    /// `page` is 1-based. Zero values are raised to 1; `per_page` defaults
    /// to the configured size and is capped at the configured maximum.
    pub fn list_segments(&self, page: usize, per_page: Option<usize>) -> Envelope<SegmentPage> {
        let page = page.max(1);
        let per_page = per_page
            .unwrap_or(self.config.default_per_page())
            .clamp(1, self.config.max_per_page());

        let total = match self.store().count_word_mappings() {
            Ok(total) => total,
            Err(e) => return self.failed("segment listing", e.into()),
        };
        let offset = (page - 1).saturating_mul(per_page);
        let data = match self.store().word_mappings(offset, per_page) {
            Ok(data) => data,
            Err(e) => return self.failed("segment listing", e.into()),
        };

        Envelope::ok(
            SEGMENT_FOUND,
            SegmentPage {
                data,
                pagination: Pagination {
                    page,
                    per_page,
                    total,
                    pages: total.div_ceil(per_page),
                },
            },
        )
    }

    /// Store connectivity and mapping counts.
    pub fn health(&self) -> HealthReport {
        let counts = self
            .store()
            .count_word_mappings()
            .and_then(|words| Ok((words, self.store().count_premium_mappings()?)));

        match counts {
            Ok((words, premium)) => HealthReport::healthy(words, premium),
            Err(e) => {
                log_error!(self.logger, "Health check failed: {}", e);
                HealthReport::unavailable(e.to_string())
            }
        }
    }

    fn failed<T>(&self, operation: &str, e: VocabError) -> Envelope<T> {
        match &e {
            VocabError::Store(inner) => log_error!(self.logger, "{} failed: {}", operation, inner),
            other => log_debug!(self.logger, "{} rejected: {}", operation, other),
        }
        e.into()
    }
}
