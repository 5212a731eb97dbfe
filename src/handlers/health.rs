use crate::models::HealthResponse;
use crate::routes;
use axum::{http::StatusCode, Json};
use chrono::Utc;

/// GET /health handler - Health check endpoint
///
/// The stores live in process memory, so a responding server is a healthy one.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }),
    )
}
