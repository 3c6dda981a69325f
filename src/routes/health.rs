use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn ready() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}
