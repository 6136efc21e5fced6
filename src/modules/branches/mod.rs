pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{Branch, BranchResponse};
pub use repositories::{BranchRepository, InMemoryBranchRepository, MySqlBranchRepository};
pub use services::BranchService;
