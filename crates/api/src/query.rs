//! Query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination parameters (`?page=`).
///
/// Kept as a raw string so that non-numeric values and `last` reach
/// [`sitter_core::pagination::PageRequest::parse`] instead of failing
/// extraction.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}
