//! Repository for the `pets` table.

use sqlx::PgPool;

use crate::models::pet::{CreatePet, Pet};

/// Provides insert access to pets.
pub struct PetRepo;

impl PetRepo {
    /// Insert a new pet, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePet) -> Result<Pet, sqlx::Error> {
        sqlx::query_as::<_, Pet>("INSERT INTO pets (name) VALUES ($1) RETURNING id, name")
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }
}
