use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, ValidationErrors};

/// Branch (sucursal) owned by exactly one franchise.
///
/// `franchise_id` is fixed at creation; branches never move between franchises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub franchise_id: i64,
}

impl Branch {
    pub fn new(franchise_id: i64, name: impl Into<String>) -> Self {
        Self {
            id: 0, // Will be set by the store
            name: name.into(),
            franchise_id,
        }
    }
}

/// Request body for POST /api/franquicias/{id}/sucursales
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBranchRequest {
    #[serde(default)]
    pub name: String,
}

impl CreateBranchRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &self.name, "Name is required");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBranchNameRequest {
    #[serde(default)]
    pub name: String,
}

impl UpdateBranchNameRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &self.name, "Name is required");
        errors.into_result()
    }
}

/// Branch projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchResponse {
    pub id: i64,
    pub name: String,
    pub franchise_id: i64,
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        Self {
            id: branch.id,
            name: branch.name,
            franchise_id: branch.franchise_id,
        }
    }
}
