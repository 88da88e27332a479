/*
 * Responsibility
 * - GET /health (liveness)
 * - Mounted outside `protect`: must answer without a token
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
