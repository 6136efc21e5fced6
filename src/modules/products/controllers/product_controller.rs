use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::products::models::{
    CreateProductRequest, UpdateProductNameRequest, UpdateStockRequest,
};
use crate::modules::products::services::ProductService;

/// Create a product in a branch
/// POST /api/sucursales/{branch_id}/productos
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let request = request.into_inner();
    let product = service
        .create(
            path.into_inner(),
            &request.name,
            request.description,
            request.stock,
        )
        .await?;

    Ok(HttpResponse::Created().json(product))
}

/// Delete a product from a branch
/// DELETE /api/sucursales/{branch_id}/productos/{product_id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (branch_id, product_id) = path.into_inner();
    service.delete(branch_id, product_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Update product stock
/// PATCH /api/sucursales/{branch_id}/productos/{product_id}/stock
pub async fn update_stock(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateStockRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (branch_id, product_id) = path.into_inner();
    let product = service
        .update_stock(branch_id, product_id, request.stock)
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Rename a product
/// PATCH /api/sucursales/{branch_id}/productos/{product_id}/name
pub async fn update_product_name(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<(i64, i64)>,
    request: web::Json<UpdateProductNameRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let (branch_id, product_id) = path.into_inner();
    let product = service
        .update_name(branch_id, product_id, &request.name)
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/sucursales/{branch_id}/productos",
        web::post().to(create_product),
    )
    .route(
        "/sucursales/{branch_id}/productos/{product_id}",
        web::delete().to(delete_product),
    )
    .route(
        "/sucursales/{branch_id}/productos/{product_id}/stock",
        web::patch().to(update_stock),
    )
    .route(
        "/sucursales/{branch_id}/productos/{product_id}/name",
        web::patch().to(update_product_name),
    );
}
