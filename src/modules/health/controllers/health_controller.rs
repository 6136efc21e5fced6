use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::app::Storage;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub application: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub storage: String,
}

/// GET /api/health - Liveness probe
/// Does not check dependencies
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "UP".to_string(),
        application: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// GET /api/ready - Readiness probe
/// Returns 503 when the backing store does not answer
pub async fn readiness_check(storage: web::Data<Storage>) -> impl Responder {
    let ready = match storage.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Storage readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready,
        storage: storage.backend().to_string(),
    };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes (mounted under /api)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
