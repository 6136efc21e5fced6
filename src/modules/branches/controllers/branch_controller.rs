use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::branches::models::{CreateBranchRequest, UpdateBranchNameRequest};
use crate::modules::branches::services::BranchService;

/// Create a branch in a franchise
/// POST /api/franquicias/{franchise_id}/sucursales
pub async fn create_branch(
    service: web::Data<Arc<BranchService>>,
    path: web::Path<i64>,
    request: web::Json<CreateBranchRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let branch = service.create(path.into_inner(), &request.name).await?;

    Ok(HttpResponse::Created().json(branch))
}

/// Rename a branch of a franchise
/// PATCH /api/franquicias/{franchise_id}/sucursales/{branch_id}/name
pub async fn rename_branch(
    service: web::Data<Arc<BranchService>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateBranchNameRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (franchise_id, branch_id) = path.into_inner();
    let branch = service
        .rename(franchise_id, branch_id, &request.name)
        .await?;

    Ok(HttpResponse::Ok().json(branch))
}

/// Configure branch routes (mounted under /api)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/franquicias/{franchise_id}/sucursales",
        web::post().to(create_branch),
    )
    .route(
        "/franquicias/{franchise_id}/sucursales/{branch_id}/name",
        web::patch().to(rename_branch),
    );
}
