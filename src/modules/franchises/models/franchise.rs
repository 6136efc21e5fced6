use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, ValidationErrors};

/// Franchise model, root of the ownership hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Franchise {
    pub id: i64,
    pub name: String,
}

impl Franchise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0, // Will be set by the store
            name: name.into(),
        }
    }
}

/// Request body for POST /api/franquicias
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFranchiseRequest {
    #[serde(default)]
    pub name: String,
}

impl CreateFranchiseRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &self.name, "Name is required");
        errors.into_result()
    }
}

/// Request body for PATCH /api/franquicias/{id}/name
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFranchiseNameRequest {
    #[serde(default)]
    pub name: String,
}

impl UpdateFranchiseNameRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &self.name, "Name is required");
        errors.into_result()
    }
}

/// Franchise projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseResponse {
    pub id: i64,
    pub name: String,
}

impl From<Franchise> for FranchiseResponse {
    fn from(franchise: Franchise) -> Self {
        Self {
            id: franchise.id,
            name: franchise.name,
        }
    }
}
