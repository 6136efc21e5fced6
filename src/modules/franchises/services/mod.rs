pub mod franchise_service;

pub use franchise_service::FranchiseService;
