//! Listing entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sitter_core::types::DbId;

/// A row from the `listings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// A listing together with the ids of its pets and assignments.
///
/// This is the public representation: the listing's own id is not exposed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingSummary {
    #[serde(skip_serializing)]
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    /// Pet ids in ascending order.
    pub pets: Vec<DbId>,
    /// Assignment ids in ascending order.
    pub assignments: Vec<DbId>,
}

/// DTO for creating a new listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateListing {
    pub first_name: String,
    pub last_name: String,
}
