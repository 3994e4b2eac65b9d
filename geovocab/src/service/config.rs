//! Service configuration types.

use crate::config::{ListingSettings, DEFAULT_MAX_PER_PAGE, DEFAULT_PER_PAGE};

/// Configuration for [`GeoVocabService`](super::GeoVocabService).
///
/// # Example
///
/// ```
/// use geovocab::service::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .default_per_page(50)
///     .max_per_page(200)
///     .build();
///
/// assert_eq!(config.default_per_page(), 50);
/// assert_eq!(config.max_per_page(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    default_per_page: usize,
    max_per_page: usize,
}

impl ServiceConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Page size used when the caller does not ask for one.
    pub fn default_per_page(&self) -> usize {
        self.default_per_page
    }

    /// Largest page size a caller may request.
    pub fn max_per_page(&self) -> usize {
        self.max_per_page
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
        }
    }
}

impl From<&ListingSettings> for ServiceConfig {
    fn from(listing: &ListingSettings) -> Self {
        ServiceConfig::builder()
            .default_per_page(listing.per_page)
            .max_per_page(listing.max_per_page)
            .build()
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug, Clone, Default)]
pub struct ServiceConfigBuilder {
    default_per_page: Option<usize>,
    max_per_page: Option<usize>,
}

impl ServiceConfigBuilder {
    /// Set the default page size.
    pub fn default_per_page(mut self, per_page: usize) -> Self {
        self.default_per_page = Some(per_page);
        self
    }

    /// Set the maximum page size.
    pub fn max_per_page(mut self, max_per_page: usize) -> Self {
        self.max_per_page = Some(max_per_page);
        self
    }

    /// Build the configuration.
    ///
    /// Both sizes are at least 1 and the default never exceeds the maximum.
    pub fn build(self) -> ServiceConfig {
        let max_per_page = self.max_per_page.unwrap_or(DEFAULT_MAX_PER_PAGE).max(1);
        let default_per_page = self
            .default_per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, max_per_page);

        ServiceConfig {
            default_per_page,
            max_per_page,
        }
    }
}
