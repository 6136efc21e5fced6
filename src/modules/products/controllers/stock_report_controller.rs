use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::services::ProductService;

/// Highest-stocked product per branch of a franchise
/// GET /api/franquicias/{franchise_id}/productos-max-stock
pub async fn max_stock_per_branch(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let report = service.max_stock_per_branch(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(report))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/franquicias/{franchise_id}/productos-max-stock",
        web::get().to(max_stock_per_branch),
    );
}
