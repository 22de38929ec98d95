//! Route tables.
//!
//! ```text
//! /health                     health check
//!
//! /listings                   list (paginated)
//! /listings/                  list (paginated)
//! /listings/assignments       list, create
//! ```

pub mod health;
pub mod listing;
