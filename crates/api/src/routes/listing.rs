//! Route definitions for the `/listings` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{assignment, listing};
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET    /listings                -> listing::list
/// GET    /listings/               -> listing::list
/// GET    /listings/assignments    -> assignment::list
/// POST   /listings/assignments    -> assignment::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/listings", get(listing::list))
        .route("/listings/", get(listing::list))
        .route(
            "/listings/assignments",
            get(assignment::list).post(assignment::create),
        )
}
