//! Pet entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sitter_core::types::DbId;

/// A row from the `pets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pet {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new pet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePet {
    pub name: String,
}
