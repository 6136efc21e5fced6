pub mod product_controller;
pub mod stock_report_controller;

use actix_web::web;

/// Configure product and stock report routes (mounted under /api)
pub fn configure(cfg: &mut web::ServiceConfig) {
    product_controller::configure(cfg);
    stock_report_controller::configure(cfg);
}
