//! Shared API request/response types
//!
//! Wire shapes used by every PayFlow endpoint. Handler-specific response
//! bodies live next to their handlers; only cross-cutting shapes live here.

use serde::{Deserialize, Serialize};

/// Error response body returned by all failing endpoints
///
/// The HTTP layer maps error variants to status codes; the body carries a
/// human-readable message only. No stack traces or parser internals are
/// guaranteed stable across versions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Pagination metadata echoed back on list endpoints
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PaginationMeta {
    /// Current page number (1-indexed)
    pub page: u64,
    /// Requested page size
    pub per_page: u64,
    /// Total items in the collection
    pub total: u64,
    /// Total number of pages
    pub total_pages: u64,
}
