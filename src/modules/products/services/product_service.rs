use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::branches::services::BranchService;
use crate::modules::franchises::services::FranchiseService;
use crate::modules::products::models::{MaxStockProductResponse, Product, ProductResponse};
use crate::modules::products::repositories::ProductRepository;

/// Service for products held in branches and the max-stock report
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
    branch_service: Arc<BranchService>,
    franchise_service: Arc<FranchiseService>,
}

impl ProductService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        branch_service: Arc<BranchService>,
        franchise_service: Arc<FranchiseService>,
    ) -> Self {
        Self {
            product_repo,
            branch_service,
            franchise_service,
        }
    }

    /// Create a product in an existing branch.
    /// Stock defaults to 0; the description is stored but not projected.
    pub async fn create(
        &self,
        branch_id: i64,
        name: &str,
        description: Option<String>,
        stock: Option<i32>,
    ) -> Result<ProductResponse> {
        let branch = self.branch_service.resolve(branch_id).await?;

        let stock = stock.unwrap_or(0);
        Self::ensure_non_negative(stock)?;

        let product = self
            .product_repo
            .create(Product::new(branch.id, name, description, stock))
            .await?;

        info!(
            product_id = product.id,
            branch_id = branch.id,
            stock = product.stock,
            "Product created"
        );

        Ok(product.into())
    }

    /// Delete a product from a branch.
    ///
    /// Existence and ownership are checked by one predicate, so a product
    /// held by another branch is indistinguishable from a missing one.
    pub async fn delete(&self, branch_id: i64, product_id: i64) -> Result<()> {
        if !self
            .product_repo
            .exists_by_id_and_branch_id(product_id, branch_id)
            .await?
        {
            return Err(AppError::not_found(format!(
                "Producto not found in sucursal: {}",
                product_id
            )));
        }

        self.product_repo.delete(product_id).await?;

        info!(product_id, branch_id, "Product deleted");

        Ok(())
    }

    /// Set a product's stock. `None` leaves the stock unchanged.
    pub async fn update_stock(
        &self,
        branch_id: i64,
        product_id: i64,
        stock: Option<i32>,
    ) -> Result<ProductResponse> {
        let mut product = self.resolve_in_branch(branch_id, product_id).await?;

        if let Some(stock) = stock {
            Self::ensure_non_negative(stock)?;
            product.stock = stock;
        }

        let product = self.product_repo.update(&product).await?;

        info!(product_id, branch_id, stock = product.stock, "Product stock updated");

        Ok(product.into())
    }

    pub async fn update_name(
        &self,
        branch_id: i64,
        product_id: i64,
        name: &str,
    ) -> Result<ProductResponse> {
        let mut product = self.resolve_in_branch(branch_id, product_id).await?;
        product.name = name.to_string();

        let product = self.product_repo.update(&product).await?;

        info!(product_id, branch_id, "Product renamed");

        Ok(product.into())
    }

    /// Highest-stocked product of every branch of a franchise.
    ///
    /// Entries follow branch listing order. Branches without products are
    /// left out. An unknown franchise is the only failure.
    pub async fn max_stock_per_branch(
        &self,
        franchise_id: i64,
    ) -> Result<Vec<MaxStockProductResponse>> {
        self.franchise_service.resolve(franchise_id).await?;

        let branches = self.branch_service.list_by_franchise(franchise_id).await?;

        let mut report = Vec::with_capacity(branches.len());
        for branch in &branches {
            match self
                .product_repo
                .find_max_stock_by_branch_id(branch.id)
                .await?
            {
                Some(product) => report.push(MaxStockProductResponse::new(branch, product)),
                None => debug!(branch_id = branch.id, "Branch has no products"),
            }
        }

        info!(
            franchise_id,
            branches = branches.len(),
            entries = report.len(),
            "Max stock report generated"
        );

        Ok(report)
    }

    /// Resolve a product by id, then require it to be held by `branch_id`.
    /// The two failures carry different messages.
    async fn resolve_in_branch(&self, branch_id: i64, product_id: i64) -> Result<Product> {
        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Producto not found: {}", product_id)))?;

        if product.branch_id != branch_id {
            warn!(
                product_id,
                branch_id,
                owner_id = product.branch_id,
                "Product accessed through foreign branch"
            );
            return Err(AppError::not_found(format!(
                "Producto does not belong to sucursal: {}",
                branch_id
            )));
        }

        Ok(product)
    }

    fn ensure_non_negative(stock: i32) -> Result<()> {
        if stock < 0 {
            return Err(AppError::validation("Stock cannot be negative"));
        }
        Ok(())
    }
}
