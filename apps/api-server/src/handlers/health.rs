//! Health check endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    fn now(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Liveness probe - answers while the process is up, without touching the store.
///
/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::now("ok"))
}

/// Readiness probe - pings the store.
///
/// GET /health/ready
pub async fn readiness(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.posts.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Store ping failed");
        AppError::ServiceUnavailable("Store is unreachable".to_string())
    })?;

    Ok(HttpResponse::Ok().json(HealthResponse::now("ready")))
}
