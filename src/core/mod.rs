pub mod error;
pub mod memory;
pub mod traits;
pub mod validation;

pub use error::{AppError, Result};
pub use memory::InMemoryTable;
pub use traits::Repository;
pub use validation::ValidationErrors;
