pub mod franchise_repository;

pub use franchise_repository::{
    FranchiseRepository, InMemoryFranchiseRepository, MySqlFranchiseRepository,
};
