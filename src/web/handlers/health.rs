//! `GET /health`

use axum::Json;
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok`
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}

/// Liveness check. Does not touch the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
