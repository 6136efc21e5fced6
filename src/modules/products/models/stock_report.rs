use serde::{Deserialize, Serialize};

use crate::modules::branches::models::Branch;
use crate::modules::products::models::Product;

/// One row of the max-stock report: a branch's highest-stocked product,
/// denormalized with the branch name so no second lookup is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxStockProductResponse {
    pub product_id: i64,
    pub product_name: String,
    pub stock: i32,
    pub branch_id: i64,
    pub branch_name: String,
}

impl MaxStockProductResponse {
    pub fn new(branch: &Branch, product: Product) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name,
            stock: product.stock,
            branch_id: branch.id,
            branch_name: branch.name.clone(),
        }
    }
}
