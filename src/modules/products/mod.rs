pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{MaxStockProductResponse, Product, ProductResponse};
pub use repositories::{InMemoryProductRepository, MySqlProductRepository, ProductRepository};
pub use services::ProductService;
