use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::core::{AppError, Result};
use crate::modules::branches::models::{Branch, BranchResponse};
use crate::modules::branches::repositories::BranchRepository;
use crate::modules::franchises::services::FranchiseService;

/// Service for branches; validates the owning franchise on every write
pub struct BranchService {
    branch_repo: Arc<dyn BranchRepository>,
    franchise_service: Arc<FranchiseService>,
}

impl BranchService {
    pub fn new(
        branch_repo: Arc<dyn BranchRepository>,
        franchise_service: Arc<FranchiseService>,
    ) -> Self {
        Self {
            branch_repo,
            franchise_service,
        }
    }

    /// Create a branch under an existing franchise
    pub async fn create(&self, franchise_id: i64, name: &str) -> Result<BranchResponse> {
        let franchise = self.franchise_service.resolve(franchise_id).await?;

        let branch = self
            .branch_repo
            .create(Branch::new(franchise.id, name))
            .await?;

        info!(
            branch_id = branch.id,
            franchise_id = franchise.id,
            "Branch created"
        );

        Ok(branch.into())
    }

    /// Rename a branch reached through `franchise_id`.
    ///
    /// A branch that exists but belongs to another franchise is reported as
    /// not found; the message names the franchise, not the branch.
    pub async fn rename(
        &self,
        franchise_id: i64,
        branch_id: i64,
        name: &str,
    ) -> Result<BranchResponse> {
        self.franchise_service.resolve(franchise_id).await?;
        let mut branch = self.resolve(branch_id).await?;

        if branch.franchise_id != franchise_id {
            warn!(
                branch_id,
                franchise_id,
                owner_id = branch.franchise_id,
                "Branch rename through foreign franchise"
            );
            return Err(AppError::not_found(format!(
                "Sucursal does not belong to franquicia: {}",
                franchise_id
            )));
        }

        branch.name = name.to_string();
        let branch = self.branch_repo.update(&branch).await?;

        info!(branch_id, franchise_id, "Branch renamed");

        Ok(branch.into())
    }

    pub async fn resolve(&self, branch_id: i64) -> Result<Branch> {
        self.branch_repo
            .find_by_id(branch_id)
            .await?
            .ok_or_else(|| {
                debug!(branch_id, "Branch lookup missed");
                AppError::not_found(format!("Sucursal not found: {}", branch_id))
            })
    }

    /// Branches of a franchise in creation order.
    /// Does not check that the franchise exists.
    pub async fn list_by_franchise(&self, franchise_id: i64) -> Result<Vec<Branch>> {
        self.branch_repo.find_by_franchise_id(franchise_id).await
    }
}
