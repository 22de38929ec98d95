//! Handlers for the `/listings` resource.

use axum::extract::{Query, State};
use axum::Json;
use sitter_core::pagination::{Page, PageRequest, Paginated};
use sitter_db::models::listing::ListingSummary;
use sitter_db::repositories::ListingRepo;

use crate::error::AppResult;
use crate::query::PageParams;
use crate::state::AppState;

/// Path used when building `next` / `previous` page links.
const LISTINGS_PATH: &str = "/listings/";

/// GET /listings/?page=
///
/// One page of listings in ascending id order.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<Paginated<ListingSummary>>> {
    let request = PageRequest::parse(params.page.as_deref())?;
    let total = ListingRepo::count(&state.pool).await?;
    let page = Page::resolve(request, state.config.page_size, total)?;

    let listings = ListingRepo::list_page(&state.pool, page.limit(), page.offset()).await?;
    Ok(Json(Paginated::new(&page, LISTINGS_PATH, listings)))
}
