use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::api::{
    types::{GenerateRequest, GenerateResponse},
    AppState,
};

/// Model family tag handed to the backend for every request.
const MODEL_TYPE: &str = "gpt2";
/// Maximum number of tokens the backend may generate per request.
const MAX_LENGTH: u32 = 100;

pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, (StatusCode, String)> {
    let Json(req) = payload.map_err(|_| (StatusCode::BAD_REQUEST, "invalid_json".into()))?;

    let text = match req.text.as_deref() {
        Some(t) if !t.is_empty() => t,
        _ => return Err((StatusCode::BAD_REQUEST, "text_required".into())),
    };
    let model = req
        .model
        .as_deref()
        .ok_or((StatusCode::BAD_REQUEST, "model_required".into()))?;

    let result = state
        .infer
        .generate(MODEL_TYPE, MAX_LENGTH, text, model)
        .await
        .map_err(|e| {
            tracing::warn!("generation failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;

    Ok(Json(GenerateResponse { result }))
}
