use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::{Result, ValidationErrors};

/// Product held in a branch.
///
/// Invariant: `stock >= 0`. `branch_id` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Stored but never projected
    pub description: Option<String>,
    pub stock: i32,
    pub branch_id: i64,
}

impl Product {
    pub fn new(
        branch_id: i64,
        name: impl Into<String>,
        description: Option<String>,
        stock: i32,
    ) -> Self {
        Self {
            id: 0, // Will be set by the store
            name: name.into(),
            description,
            stock,
            branch_id,
        }
    }
}

/// Request body for POST /api/sucursales/{branch_id}/productos
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Defaults to 0 when omitted
    #[serde(default)]
    pub stock: Option<i32>,
}

impl CreateProductRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &self.name, "Name is required");
        errors.require_non_negative("stock", self.stock, "Stock cannot be negative");
        errors.into_result()
    }
}

/// Request body for PATCH .../productos/{product_id}/stock
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStockRequest {
    #[serde(default)]
    pub stock: Option<i32>,
}

impl UpdateStockRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        if self.stock.is_none() {
            errors.add("stock", "Stock is required");
        }
        errors.require_non_negative("stock", self.stock, "Stock cannot be negative");
        errors.into_result()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProductNameRequest {
    #[serde(default)]
    pub name: String,
}

impl UpdateProductNameRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = ValidationErrors::new();
        errors.require_non_blank("name", &self.name, "Name is required");
        errors.into_result()
    }
}

/// Product projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub stock: i32,
    pub branch_id: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            stock: product.stock,
            branch_id: product.branch_id,
        }
    }
}
