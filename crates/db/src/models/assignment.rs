//! Assignment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sitter_core::assignment::{AssignmentCandidate, DateRange};
use sitter_core::types::{Date, DbId};

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    /// Serialized as `listing`, the owning listing's id.
    #[serde(rename = "listing")]
    pub listing_id: DbId,
}

impl Assignment {
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// DTO for inserting an assignment that has already been validated.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignment {
    pub listing_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
}

impl From<AssignmentCandidate> for CreateAssignment {
    fn from(candidate: AssignmentCandidate) -> Self {
        Self {
            listing_id: candidate.listing_id,
            start_date: candidate.range.start_date,
            end_date: candidate.range.end_date,
        }
    }
}
