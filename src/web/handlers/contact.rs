use crate::models::ContactRequest;
use crate::services::contact::ContactError;
use crate::web::error::{AppError, AppResult};
use crate::web::extractors::JsonBody;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

/// POST /api/form
pub async fn submit(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> AppResult<Json<serde_json::Value>> {
    state.contact.forward(&request).await.map_err(|e| match e {
        ContactError::NotConfigured => AppError::upstream("Telegram config missing", e),
        other => AppError::upstream("Failed to send to Telegram", other),
    })?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}
