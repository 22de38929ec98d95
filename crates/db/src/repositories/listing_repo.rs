//! Repository for the `listings` table and its `listing_pets` join table.

use sqlx::{PgExecutor, PgPool};
use sitter_core::types::DbId;

use crate::models::listing::{CreateListing, Listing, ListingSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name";

/// Provides access to listings.
pub struct ListingRepo;

impl ListingRepo {
    /// Insert a new listing, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateListing) -> Result<Listing, sqlx::Error> {
        let query = format!(
            "INSERT INTO listings (first_name, last_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Listing>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find a listing by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a listing and hold a row lock on it until the transaction ends.
    ///
    /// Concurrent assignment creation for the same listing queues behind
    /// this lock, so the overlap count and the insert see a stable set.
    pub async fn lock_for_update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Listing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listings WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Listing>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Total number of listings.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM listings")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// One page of listings in ascending id order, each carrying the ids of
    /// its pets and assignments.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ListingSummary>, sqlx::Error> {
        sqlx::query_as::<_, ListingSummary>(
            "SELECT l.id, l.first_name, l.last_name,
                    COALESCE(
                        (SELECT array_agg(lp.pet_id ORDER BY lp.pet_id)
                         FROM listing_pets lp WHERE lp.listing_id = l.id),
                        ARRAY[]::BIGINT[]
                    ) AS pets,
                    COALESCE(
                        (SELECT array_agg(a.id ORDER BY a.id)
                         FROM assignments a WHERE a.listing_id = l.id),
                        ARRAY[]::BIGINT[]
                    ) AS assignments
             FROM listings l
             ORDER BY l.id ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Attach a pet to a listing. Attaching twice is a no-op.
    pub async fn add_pet(pool: &PgPool, listing_id: DbId, pet_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO listing_pets (listing_id, pet_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(listing_id)
        .bind(pet_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a listing. Its assignments and pet links go with it.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
