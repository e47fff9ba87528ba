use axum::Json;
use common::types::Health;

use crate::messages::SERVICE_NAME;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is alive", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::now(SERVICE_NAME))
}
