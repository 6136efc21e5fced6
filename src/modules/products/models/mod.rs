pub mod product;
pub mod stock_report;

pub use product::{
    CreateProductRequest, Product, ProductResponse, UpdateProductNameRequest, UpdateStockRequest,
};
pub use stock_report::MaxStockProductResponse;
