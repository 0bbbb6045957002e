use crate::models::{TargetLang, TranslateRequest, TranslateResponse};
use crate::web::error::{AppError, AppResult};
use crate::web::extractors::JsonBody;
use crate::web::state::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;

/// POST /api/translate
pub async fn translate(
    State(state): State<Arc<AppState>>,
    JsonBody(request): JsonBody<TranslateRequest>,
) -> AppResult<Json<TranslateResponse>> {
    if request.text.is_empty() {
        return Err(AppError::bad_request("Text is required"));
    }
    let target: TargetLang = request
        .lang
        .parse()
        .map_err(|_| AppError::bad_request("Lang must be 'uz', 'en' or 'all'"))?;

    let response = state
        .translator
        .relay(&request.text, target)
        .await
        .map_err(|e| AppError::upstream("Translation failed", e))?;
    Ok(Json(response))
}
