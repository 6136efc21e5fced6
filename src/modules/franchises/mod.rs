pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Franchise, FranchiseResponse};
pub use repositories::{FranchiseRepository, InMemoryFranchiseRepository, MySqlFranchiseRepository};
pub use services::FranchiseService;
