//! Response envelope types.

use serde::Serialize;

use crate::store::WordMapping;
use crate::vocab::VocabError;

/// Uniform response shape: a message, a status code and optional data.
///
/// `data` is always present in the JSON and is `null` on failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub status: u16,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// A 200 response carrying data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: 200,
            data: Some(data),
        }
    }

    /// A failure response without data.
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            data: None,
        }
    }

    /// Whether the status is below 400.
    pub fn is_success(&self) -> bool {
        self.status < 400
    }
}

impl<T> From<VocabError> for Envelope<T> {
    fn from(e: VocabError) -> Self {
        Self::failure(e.status(), e.to_string())
    }
}

/// Paging metadata for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
}

/// One page of ordinary segment mappings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentPage {
    pub data: Vec<WordMapping>,
    pub pagination: Pagination,
}

/// Store statistics reported by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseHealth {
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_premium: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub database: DatabaseHealth,
}

impl HealthReport {
    const SERVICE_NAME: &'static str = "geovocab";

    /// Report for a store that answered with its counts.
    pub fn healthy(total_words: usize, total_premium: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            service: Self::SERVICE_NAME.to_string(),
            database: DatabaseHealth {
                connected: true,
                total_words: Some(total_words),
                total_premium: Some(total_premium),
                error: None,
            },
        }
    }

    /// Report for a store that could not be reached.
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            service: Self::SERVICE_NAME.to_string(),
            database: DatabaseHealth {
                connected: false,
                total_words: None,
                total_premium: None,
                error: Some(error.into()),
            },
        }
    }

    /// Whether the store answered.
    pub fn is_healthy(&self) -> bool {
        self.database.connected
    }
}
