pub mod branch_service;

pub use branch_service::BranchService;
