//! Integration tests for the assignment overlap count query.
//!
//! The count must agree with the in-memory endpoint-containment predicate,
//! including inclusive boundaries and the strictly-contained gap.

use sqlx::PgPool;
use sitter_core::assignment::{self, DateRange};
use sitter_core::types::{Date, DbId};
use sitter_db::models::assignment::CreateAssignment;
use sitter_db::models::listing::CreateListing;
use sitter_db::repositories::{AssignmentRepo, ListingRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn d(y: i32, m: u32, day: u32) -> Date {
    Date::from_ymd_opt(y, m, day).unwrap()
}

async fn listing(pool: &PgPool, first: &str) -> DbId {
    ListingRepo::create(
        pool,
        &CreateListing {
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn book(pool: &PgPool, listing_id: DbId, start: Date, end: Date) {
    AssignmentRepo::create(
        pool,
        &CreateAssignment {
            listing_id,
            start_date: start,
            end_date: end,
        },
    )
    .await
    .unwrap();
}

async fn count(pool: &PgPool, listing_id: DbId, start: Date, end: Date) -> i64 {
    AssignmentRepo::count_overlapping(pool, listing_id, DateRange::new(start, end))
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_is_zero_for_empty_listing(pool: PgPool) {
    let id = listing(&pool, "Empty").await;
    assert_eq!(count(&pool, id, d(2025, 2, 7), d(2025, 2, 15)).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_includes_boundaries(pool: PgPool) {
    let id = listing(&pool, "Bounds").await;
    book(&pool, id, d(2025, 2, 7), d(2025, 2, 15)).await;

    // Existing end inside candidate.
    assert_eq!(count(&pool, id, d(2025, 2, 8), d(2025, 2, 16)).await, 1);
    // Existing start inside candidate.
    assert_eq!(count(&pool, id, d(2025, 2, 1), d(2025, 2, 8)).await, 1);
    // Identical range.
    assert_eq!(count(&pool, id, d(2025, 2, 7), d(2025, 2, 15)).await, 1);
    // Shared boundary day.
    assert_eq!(count(&pool, id, d(2025, 2, 15), d(2025, 2, 28)).await, 1);
    assert_eq!(count(&pool, id, d(2025, 2, 1), d(2025, 2, 7)).await, 1);
    // Adjacent but not touching.
    assert_eq!(count(&pool, id, d(2025, 2, 16), d(2025, 2, 28)).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_skips_strictly_containing_assignment(pool: PgPool) {
    let id = listing(&pool, "Gap").await;
    book(&pool, id, d(2025, 1, 1), d(2025, 1, 31)).await;

    assert_eq!(count(&pool, id, d(2025, 1, 10), d(2025, 1, 15)).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_is_scoped_to_listing(pool: PgPool) {
    let ross = listing(&pool, "Ross").await;
    let rachel = listing(&pool, "Rachel").await;
    book(&pool, ross, d(2025, 2, 7), d(2025, 2, 15)).await;

    assert_eq!(count(&pool, rachel, d(2025, 2, 7), d(2025, 2, 15)).await, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_count_matches_in_memory_predicate(pool: PgPool) {
    let id = listing(&pool, "Agree").await;
    book(&pool, id, d(2025, 3, 1), d(2025, 3, 5)).await;
    book(&pool, id, d(2025, 3, 10), d(2025, 3, 12)).await;
    book(&pool, id, d(2025, 3, 20), d(2025, 4, 20)).await;

    let stored: Vec<DateRange> = AssignmentRepo::list_by_listing(&pool, id)
        .await
        .unwrap()
        .iter()
        .map(|a| a.range())
        .collect();

    let candidates = [
        DateRange::new(d(2025, 3, 4), d(2025, 3, 11)),
        DateRange::new(d(2025, 3, 6), d(2025, 3, 9)),
        DateRange::new(d(2025, 4, 1), d(2025, 4, 2)),
        DateRange::new(d(2025, 2, 1), d(2025, 5, 1)),
    ];

    for candidate in candidates {
        let sql = AssignmentRepo::count_overlapping(&pool, id, candidate)
            .await
            .unwrap();
        assert_eq!(
            sql,
            assignment::count_overlapping(&stored, &candidate),
            "count mismatch for {candidate:?}"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reversed_range_is_refused_by_storage(pool: PgPool) {
    let id = listing(&pool, "Reversed").await;
    let result = AssignmentRepo::create(
        &pool,
        &CreateAssignment {
            listing_id: id,
            start_date: d(2025, 2, 15),
            end_date: d(2025, 2, 7),
        },
    )
    .await;

    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_by_id(pool: PgPool) {
    let id = listing(&pool, "Order").await;
    book(&pool, id, d(2025, 6, 1), d(2025, 6, 2)).await;
    book(&pool, id, d(2025, 1, 1), d(2025, 1, 2)).await;

    let all = AssignmentRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].id < all[1].id);
    assert_eq!(all[0].start_date, d(2025, 6, 1));
}
