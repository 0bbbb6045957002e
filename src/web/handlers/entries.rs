use crate::models::{EntityKind, Entry, EntrySubmission};
use crate::web::error::{AppError, AppResult};
use crate::web::state::AppState;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use std::sync::Arc;

/// A non-integer id names no row.
fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn status_ok() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/{kind}
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<EntityKind>,
) -> AppResult<Json<Vec<Entry>>> {
    let entries = state.entries(kind).list().map_err(AppError::Database)?;
    Ok(Json(entries))
}

/// GET /api/{kind}/:id
pub async fn get(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<EntityKind>,
    Path(id): Path<String>,
) -> AppResult<Json<Entry>> {
    let id = parse_id(&id).ok_or(AppError::NotFound)?;
    state
        .entries(kind)
        .get(id)
        .map_err(AppError::Database)?
        .map(Json)
        .ok_or(AppError::NotFound)
}

/// POST /api/{kind}
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<EntityKind>,
    submission: EntrySubmission,
) -> AppResult<Json<Entry>> {
    let entry = state
        .entries(kind)
        .create(submission, &state.uploads)
        .map_err(AppError::Database)?;
    tracing::info!("Created {} {}", kind, entry.id);
    Ok(Json(entry))
}

/// POST|PUT /api/{kind}/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<EntityKind>,
    Path(id): Path<String>,
    submission: EntrySubmission,
) -> AppResult<Json<serde_json::Value>> {
    match parse_id(&id) {
        Some(id) => {
            state
                .entries(kind)
                .replace(id, submission, &state.uploads)
                .map_err(AppError::Database)?;
        }
        None => tracing::debug!("Update of {} {:?} matched no row", kind, id),
    }
    Ok(status_ok())
}

/// DELETE /api/{kind}/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(kind): Extension<EntityKind>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(id) = parse_id(&id) {
        state.entries(kind).delete(id).map_err(AppError::Database)?;
    }
    Ok(status_ok())
}

/// Any method on `/api/{kind}/`.
pub async fn missing_id() -> AppResult<()> {
    Err(AppError::bad_request("Missing id"))
}
