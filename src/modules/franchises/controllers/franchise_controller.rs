use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::franchises::models::{CreateFranchiseRequest, UpdateFranchiseNameRequest};
use crate::modules::franchises::services::FranchiseService;

/// Create a franchise
/// POST /api/franquicias
pub async fn create_franchise(
    service: web::Data<Arc<FranchiseService>>,
    request: web::Json<CreateFranchiseRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let franchise = service.create(&request.name).await?;

    Ok(HttpResponse::Created().json(franchise))
}

/// Rename a franchise
/// PATCH /api/franquicias/{franchise_id}/name
pub async fn rename_franchise(
    service: web::Data<Arc<FranchiseService>>,
    path: web::Path<i64>,
    request: web::Json<UpdateFranchiseNameRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let franchise = service.rename(path.into_inner(), &request.name).await?;

    Ok(HttpResponse::Ok().json(franchise))
}

/// Configure franchise routes (mounted under /api)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/franquicias", web::post().to(create_franchise))
        .route(
            "/franquicias/{franchise_id}/name",
            web::patch().to(rename_franchise),
        );
}
