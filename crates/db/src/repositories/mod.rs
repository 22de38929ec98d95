//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. Read
//! paths take `&PgPool`; methods that may run inside a caller's transaction
//! accept any [`sqlx::PgExecutor`].

pub mod assignment_repo;
pub mod listing_repo;
pub mod pet_repo;

pub use assignment_repo::AssignmentRepo;
pub use listing_repo::ListingRepo;
pub use pet_repo::PetRepo;
