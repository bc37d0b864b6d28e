/// Health check API routes
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// GET / - Health check endpoint
///
/// Answers regardless of storage state.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: format!("roster-server v{} is running", env!("CARGO_PKG_VERSION")),
    })
}
