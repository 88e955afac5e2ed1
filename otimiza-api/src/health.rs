use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "OtimizaVenda API funcionando perfeitamente!".to_string(),
    })
}
