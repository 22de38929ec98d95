//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight to the router with `tower::ServiceExt`, no TCP
//! listener involved.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use sitter_api::config::ServerConfig;
use sitter_api::router::build_app_router;
use sitter_api::state::AppState;
use sitter_core::types::{Date, DbId};
use sitter_db::models::assignment::CreateAssignment;
use sitter_db::models::listing::CreateListing;
use sitter_db::repositories::{AssignmentRepo, ListingRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        page_size: 10,
        db_max_connections: 5,
    }
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, test_config())
}

pub fn build_test_app_with(pool: PgPool, config: ServerConfig) -> Router {
    build_app_router(AppState {
        pool,
        config: Arc::new(config),
    })
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// ISO date `days` away from the server's local today.
pub fn days_from_today(days: i64) -> String {
    iso(local_date(days))
}

pub fn local_date(days: i64) -> Date {
    chrono::Local::now().date_naive() + chrono::Duration::days(days)
}

pub fn iso(date: Date) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub async fn seed_listing(pool: &PgPool, first: &str, last: &str) -> DbId {
    ListingRepo::create(
        pool,
        &CreateListing {
            first_name: first.to_string(),
            last_name: last.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

/// Insert an assignment directly, bypassing the scheduling rules.
pub async fn seed_assignment(pool: &PgPool, listing_id: DbId, start: Date, end: Date) -> DbId {
    AssignmentRepo::create(
        pool,
        &CreateAssignment {
            listing_id,
            start_date: start,
            end_date: end,
        },
    )
    .await
    .unwrap()
    .id
}
