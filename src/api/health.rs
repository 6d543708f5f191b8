use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::store::EmployeeStore;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Process is running", body = Object, example = json!({
            "status": "alive"
        }))
    ),
    tag = "Probes"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "alive" }))
}

/// Readiness probe
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Store initialised", body = Object, example = json!({
            "status": "ready"
        })),
        (status = 503, description = "Store still loading", body = Object, example = json!({
            "status": "not ready"
        }))
    ),
    tag = "Probes"
)]
pub async fn ready(store: web::Data<dyn EmployeeStore>) -> impl Responder {
    if store.is_ready() {
        HttpResponse::Ok().json(json!({ "status": "ready" }))
    } else {
        HttpResponse::ServiceUnavailable().json(json!({ "status": "not ready" }))
    }
}
