//! Repository for the `assignments` table.

use sqlx::{PgExecutor, PgPool};
use sitter_core::assignment::DateRange;
use sitter_core::types::DbId;

use crate::models::assignment::{Assignment, CreateAssignment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, start_date, end_date, listing_id";

/// Provides access to assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert an assignment, returning the created row.
    ///
    /// Performs no scheduling checks; callers validate first.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateAssignment,
    ) -> Result<Assignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO assignments (listing_id, start_date, end_date)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Assignment>(&query)
            .bind(input.listing_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(executor)
            .await
    }

    /// List every assignment in ascending id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments ORDER BY id ASC");
        sqlx::query_as::<_, Assignment>(&query).fetch_all(pool).await
    }

    /// List a listing's assignments in ascending id order.
    pub async fn list_by_listing(
        pool: &PgPool,
        listing_id: DbId,
    ) -> Result<Vec<Assignment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM assignments WHERE listing_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(listing_id)
            .fetch_all(pool)
            .await
    }

    /// Count the listing's assignments with either endpoint inside `range`.
    ///
    /// Both bounds are inclusive. An assignment that strictly contains
    /// `range` has no endpoint inside it and is not counted.
    pub async fn count_overlapping<'e>(
        executor: impl PgExecutor<'e>,
        listing_id: DbId,
        range: DateRange,
    ) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM assignments
             WHERE listing_id = $1
               AND (start_date BETWEEN $2 AND $3
                    OR end_date BETWEEN $2 AND $3)",
        )
        .bind(listing_id)
        .bind(range.start_date)
        .bind(range.end_date)
        .fetch_one(executor)
        .await?;
        Ok(row.0)
    }
}
