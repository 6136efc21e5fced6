//! Request-body checks run at the HTTP boundary before any service call.

use crate::core::{AppError, Result};

/// Collects `field: message` violations and reports them together.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    violations: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.violations.push(format!("{}: {}", field, message));
    }

    /// Record a violation when `value` is empty or whitespace only
    pub fn require_non_blank(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    pub fn require_non_negative(&mut self, field: &str, value: Option<i32>, message: &str) {
        if matches!(value, Some(v) if v < 0) {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn into_result(self) -> Result<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.violations.join(", ")))
        }
    }
}
