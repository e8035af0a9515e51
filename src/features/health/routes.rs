use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::schools::SchoolRepository;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponseDto {
    pub status: String,
    pub database: String,
}

/// Health check
///
/// Runs a trivial query against the database.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are up", body = HealthResponseDto),
        (status = 500, description = "Database unreachable", body = HealthResponseDto)
    ),
    tag = "health"
)]
pub async fn health_check(
    State(repository): State<Arc<dyn SchoolRepository>>,
) -> (StatusCode, Json<HealthResponseDto>) {
    match repository.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponseDto {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponseDto {
                    status: "unhealthy".to_string(),
                    database: "disconnected".to_string(),
                }),
            )
        }
    }
}

pub fn routes(repository: Arc<dyn SchoolRepository>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(repository)
}
