//! Handlers for the `/listings/assignments` resource.
//!
//! Creation runs in one transaction: the owning listing row is locked, the
//! scheduling rules are checked (the overlap count runs on the same
//! connection), and only then is the assignment inserted.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use sitter_core::assignment::{self, AssignmentCandidate, DateRange};
use sitter_core::error::{CoreError, FieldErrors};
use sitter_core::types::{Date, DbId};
use sitter_db::models::assignment::{Assignment, CreateAssignment};
use sitter_db::repositories::{AssignmentRepo, ListingRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const FIELD_REQUIRED: &str = "This field is required.";
const FIELD_NOT_NULL: &str = "This field may not be null.";
const DATE_FORMAT: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /listings/assignments
///
/// Every assignment in ascending id order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Assignment>>> {
    let assignments = AssignmentRepo::list(&state.pool).await?;
    Ok(Json(assignments))
}

/// POST /listings/assignments
///
/// Body: `{"start_date": "YYYY-MM-DD", "end_date": "YYYY-MM-DD", "listing": <id>}`.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Assignment>)> {
    let Json(body) = payload.map_err(json_rejection)?;
    let candidate = parse_candidate(&body)?;

    let mut tx = state.pool.begin().await?;

    if ListingRepo::lock_for_update(&mut *tx, candidate.listing_id)
        .await?
        .is_none()
    {
        return Err(CoreError::field("listing", pk_does_not_exist(candidate.listing_id)).into());
    }

    let conn = &mut *tx;
    let verdict = assignment::validate_assignment(
        &candidate,
        local_today(),
        move |listing_id, range| async move {
            AssignmentRepo::count_overlapping(conn, listing_id, range)
                .await
                .map_err(AppError::from)
        },
    )
    .await;

    if let Err(AppError::Core(CoreError::ValidationRejected(reason))) = &verdict {
        tracing::info!(
            listing_id = candidate.listing_id,
            start_date = %candidate.range.start_date,
            end_date = %candidate.range.end_date,
            %reason,
            "Assignment rejected"
        );
    }
    verdict?;

    let created = AssignmentRepo::create(&mut *tx, &CreateAssignment::from(candidate)).await?;
    tx.commit().await?;

    tracing::info!(
        assignment_id = created.id,
        listing_id = created.listing_id,
        "Assignment created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// The server's local calendar date.
fn local_today() -> Date {
    chrono::Local::now().date_naive()
}

// ---------------------------------------------------------------------------
// Request parsing
// ---------------------------------------------------------------------------

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => AppError::UnsupportedMediaType(
            "Expected request with `Content-Type: application/json`".to_string(),
        ),
        JsonRejection::JsonDataError(_) => {
            AppError::BadRequest("Invalid data. Expected a JSON object.".to_string())
        }
        other => AppError::BadRequest(format!("JSON parse error - {}", other.body_text())),
    }
}

fn pk_does_not_exist(pk: impl std::fmt::Display) -> String {
    format!("Invalid pk \"{pk}\" - object does not exist.")
}

/// Decode the request fields, collecting every field-level error.
fn parse_candidate(body: &Map<String, Value>) -> Result<AssignmentCandidate, CoreError> {
    let mut errors = FieldErrors::new();

    let start_date = parse_date(body, "start_date", &mut errors);
    let end_date = parse_date(body, "end_date", &mut errors);
    let listing = parse_pk(body, "listing", &mut errors);

    match (start_date, end_date, listing) {
        (Some(start_date), Some(end_date), Some(listing_id)) if errors.is_empty() => {
            Ok(AssignmentCandidate {
                listing_id,
                range: DateRange::new(start_date, end_date),
            })
        }
        _ => Err(CoreError::FieldErrors(errors)),
    }
}

fn push_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}

/// Look up a required, non-null field.
fn required<'a>(
    body: &'a Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<&'a Value> {
    match body.get(field) {
        None => {
            push_error(errors, field, FIELD_REQUIRED);
            None
        }
        Some(Value::Null) => {
            push_error(errors, field, FIELD_NOT_NULL);
            None
        }
        Some(value) => Some(value),
    }
}

fn parse_date(body: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<Date> {
    let value = required(body, field, errors)?;
    let parsed = value
        .as_str()
        .and_then(|raw| Date::parse_from_str(raw.trim(), "%Y-%m-%d").ok());
    if parsed.is_none() {
        push_error(errors, field, DATE_FORMAT);
    }
    parsed
}

/// Primary keys may arrive as JSON integers or numeric strings.
///
/// An integer that does not fit a [`DbId`] cannot name a stored row and is
/// reported as missing rather than as a type error.
fn parse_pk(body: &Map<String, Value>, field: &str, errors: &mut FieldErrors) -> Option<DbId> {
    let value = required(body, field, errors)?;
    let literal = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        Value::String(s) => Some(s.trim().to_string()),
        _ => None,
    };

    match literal {
        Some(literal) if is_integer_literal(&literal) => match literal.parse::<DbId>() {
            Ok(id) => Some(id),
            Err(_) => {
                push_error(errors, field, pk_does_not_exist(&literal));
                None
            }
        },
        _ => {
            push_error(
                errors,
                field,
                format!(
                    "Incorrect type. Expected pk value, received {}.",
                    json_type_name(value)
                ),
            );
            None
        }
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
