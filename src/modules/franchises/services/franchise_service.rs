use std::sync::Arc;

use tracing::{debug, info};

use crate::core::{AppError, Result};
use crate::modules::franchises::models::{Franchise, FranchiseResponse};
use crate::modules::franchises::repositories::FranchiseRepository;

/// Service owning franchise lifecycle and the franchise existence check
pub struct FranchiseService {
    franchise_repo: Arc<dyn FranchiseRepository>,
}

impl FranchiseService {
    pub fn new(franchise_repo: Arc<dyn FranchiseRepository>) -> Self {
        Self { franchise_repo }
    }

    /// Create a franchise. Names are not unique.
    pub async fn create(&self, name: &str) -> Result<FranchiseResponse> {
        let franchise = self.franchise_repo.create(Franchise::new(name)).await?;

        info!(franchise_id = franchise.id, "Franchise created");

        Ok(franchise.into())
    }

    pub async fn rename(&self, franchise_id: i64, name: &str) -> Result<FranchiseResponse> {
        let mut franchise = self.resolve(franchise_id).await?;
        franchise.name = name.to_string();

        let franchise = self.franchise_repo.update(&franchise).await?;

        info!(franchise_id, "Franchise renamed");

        Ok(franchise.into())
    }

    /// Look up a franchise or fail with NotFound.
    ///
    /// Every operation that references a franchise, directly or through a
    /// branch, goes through here first.
    pub async fn resolve(&self, franchise_id: i64) -> Result<Franchise> {
        self.franchise_repo
            .find_by_id(franchise_id)
            .await?
            .ok_or_else(|| {
                debug!(franchise_id, "Franchise lookup missed");
                AppError::not_found(format!("Franquicia not found: {}", franchise_id))
            })
    }
}
