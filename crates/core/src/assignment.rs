//! Assignment scheduling rules.
//!
//! An assignment books a listing for an inclusive range of calendar days.
//! Creation is accepted only when the range is well-ordered, starts no
//! earlier than tomorrow, and none of the listing's existing assignments has
//! an endpoint inside the candidate range.
//!
//! The overlap rule is endpoint containment, not interval intersection: an
//! existing assignment that strictly surrounds the candidate has neither
//! endpoint inside it and is not counted.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, DbId};

// ---------------------------------------------------------------------------
// Rejection reasons
// ---------------------------------------------------------------------------

pub const END_BEFORE_START: &str = "End date must occur after start";

pub const START_NOT_IN_FUTURE: &str = "Start date must be from tomorrow onwards";

pub const DATES_OVERLAP: &str = "Your chosen dates have overlapped with an existing assignment";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Date,
    pub end_date: Date,
}

impl DateRange {
    pub fn new(start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Whether `date` lies within the range, both ends included.
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// A proposed assignment that has not been persisted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentCandidate {
    pub listing_id: DbId,
    pub range: DateRange,
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Checks that need no storage: ordering, then the tomorrow-or-later rule.
pub fn check_schedule(range: &DateRange, today: Date) -> Result<(), CoreError> {
    if range.start_date > range.end_date {
        return Err(CoreError::ValidationRejected(END_BEFORE_START.to_string()));
    }

    let starts_tomorrow_or_later = today
        .succ_opt()
        .is_some_and(|tomorrow| range.start_date >= tomorrow);
    if !starts_tomorrow_or_later {
        return Err(CoreError::ValidationRejected(
            START_NOT_IN_FUTURE.to_string(),
        ));
    }

    Ok(())
}

/// True when either endpoint of `existing` falls inside `candidate`.
pub fn endpoints_overlap(existing: &DateRange, candidate: &DateRange) -> bool {
    candidate.contains(existing.start_date) || candidate.contains(existing.end_date)
}

/// Count the ranges in `existing` that [`endpoints_overlap`] the candidate.
///
/// Mirrors the storage-side count query for callers holding rows in memory.
pub fn count_overlapping(existing: &[DateRange], candidate: &DateRange) -> i64 {
    existing
        .iter()
        .filter(|range| endpoints_overlap(range, candidate))
        .count() as i64
}

/// Reject when the overlap count reported by storage is non-zero.
pub fn ensure_no_overlap(overlapping: i64) -> Result<(), CoreError> {
    if overlapping > 0 {
        return Err(CoreError::ValidationRejected(DATES_OVERLAP.to_string()));
    }
    Ok(())
}

/// Run every check against `candidate`, stopping at the first failure.
///
/// `count_overlapping` is awaited only after the storage-free checks pass,
/// so a malformed or past range never reaches the database.
pub async fn validate_assignment<F, Fut, E>(
    candidate: &AssignmentCandidate,
    today: Date,
    count_overlapping: F,
) -> Result<(), E>
where
    F: FnOnce(DbId, DateRange) -> Fut,
    Fut: Future<Output = Result<i64, E>>,
    E: From<CoreError>,
{
    check_schedule(&candidate.range, today)?;
    let overlapping = count_overlapping(candidate.listing_id, candidate.range).await?;
    ensure_no_overlap(overlapping)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
