pub mod branch_repository;

pub use branch_repository::{BranchRepository, InMemoryBranchRepository, MySqlBranchRepository};
