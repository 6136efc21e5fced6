pub mod branch;

pub use branch::{Branch, BranchResponse, CreateBranchRequest, UpdateBranchNameRequest};
