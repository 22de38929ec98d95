//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate storage to the repositories in `sitter_db` and map
//! errors via [`AppError`](crate::error::AppError).

pub mod assignment;
pub mod listing;
