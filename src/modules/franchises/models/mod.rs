pub mod franchise;

pub use franchise::{
    CreateFranchiseRequest, Franchise, FranchiseResponse, UpdateFranchiseNameRequest,
};
