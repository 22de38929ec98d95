//! Domain logic for the pet-sitting listings service.
//!
//! Pure types and rules with no database or HTTP dependencies, shared by the
//! repository layer and the API server.

pub mod assignment;
pub mod error;
pub mod pagination;
pub mod types;
