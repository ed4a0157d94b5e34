use axum::{Json, response::IntoResponse};
use serde_json::json;

/// Health check handler
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// Liveness handler for the root route
pub async fn root_handler() -> &'static str {
    "Voicegate TTS gateway is running"
}
