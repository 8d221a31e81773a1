use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::HealthDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness check
///
/// # Responses
/// - 200 (OK): The server is up and serving requests
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Server is healthy", body = HealthDto),
    ),
)]
pub async fn get_health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    )
}
