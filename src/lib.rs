//! Franchise inventory API
//!
//! Franchises own branches, branches own products. Every write validates the
//! ownership chain top-down before touching the store, and the max-stock
//! report lists the highest-stocked product of each branch of a franchise.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod telemetry;

// Re-export commonly used types
pub use app::{AppServices, Storage};
pub use core::{AppError, Result};
pub use modules::branches;
pub use modules::franchises;
pub use modules::products;
