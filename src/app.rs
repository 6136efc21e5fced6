//! Process-wide wiring: the backing store handle and the service graph.
//!
//! The store is opened once in `main`, handed to every repository, and
//! closed after the HTTP server stops.

use std::sync::Arc;

use actix_web::web;
use sqlx::MySqlPool;

use crate::config::{Config, DatabaseConfig, StorageBackend};
use crate::core::{AppError, Result};
use crate::middleware::{json_error_handler, path_error_handler};
use crate::modules::branches::{
    self, BranchRepository, BranchService, InMemoryBranchRepository, MySqlBranchRepository,
};
use crate::modules::franchises::{
    self, FranchiseRepository, FranchiseService, InMemoryFranchiseRepository,
    MySqlFranchiseRepository,
};
use crate::modules::health;
use crate::modules::products::{
    self, InMemoryProductRepository, MySqlProductRepository, ProductRepository, ProductService,
};

/// Handle to the backing store
pub enum Storage {
    MySql(MySqlPool),
    Memory,
}

impl Storage {
    /// Open the configured store; for MySQL this also applies migrations
    pub async fn connect(config: &Config) -> Result<Self> {
        match config.app.storage {
            StorageBackend::MySql => {
                let database = config.database.as_ref().ok_or_else(|| {
                    AppError::Configuration("DATABASE_URL not set".to_string())
                })?;
                let pool = database.create_pool().await?;
                DatabaseConfig::run_migrations(&pool).await?;
                Ok(Storage::MySql(pool))
            }
            StorageBackend::Memory => Ok(Storage::Memory),
        }
    }

    pub fn backend(&self) -> StorageBackend {
        match self {
            Storage::MySql(_) => StorageBackend::MySql,
            Storage::Memory => StorageBackend::Memory,
        }
    }

    pub async fn ping(&self) -> Result<()> {
        match self {
            Storage::MySql(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
            Storage::Memory => Ok(()),
        }
    }

    pub async fn close(&self) {
        if let Storage::MySql(pool) = self {
            pool.close().await;
        }
    }
}

/// The three domain services, wired in dependency order
#[derive(Clone)]
pub struct AppServices {
    pub storage: web::Data<Storage>,
    pub franchises: Arc<FranchiseService>,
    pub branches: Arc<BranchService>,
    pub products: Arc<ProductService>,
}

impl AppServices {
    pub fn new(storage: Storage) -> Self {
        match &storage {
            Storage::MySql(pool) => {
                let franchise_repo = Arc::new(MySqlFranchiseRepository::new(pool.clone()));
                let branch_repo = Arc::new(MySqlBranchRepository::new(pool.clone()));
                let product_repo = Arc::new(MySqlProductRepository::new(pool.clone()));
                Self::with_repositories(storage, franchise_repo, branch_repo, product_repo)
            }
            Storage::Memory => Self::with_repositories(
                storage,
                Arc::new(InMemoryFranchiseRepository::new()),
                Arc::new(InMemoryBranchRepository::new()),
                Arc::new(InMemoryProductRepository::new()),
            ),
        }
    }

    /// Fresh, empty in-memory service graph
    pub fn in_memory() -> Self {
        Self::new(Storage::Memory)
    }

    pub fn with_repositories(
        storage: Storage,
        franchise_repo: Arc<dyn FranchiseRepository>,
        branch_repo: Arc<dyn BranchRepository>,
        product_repo: Arc<dyn ProductRepository>,
    ) -> Self {
        let franchises = Arc::new(FranchiseService::new(franchise_repo));
        let branches = Arc::new(BranchService::new(branch_repo, franchises.clone()));
        let products = Arc::new(ProductService::new(
            product_repo,
            branches.clone(),
            franchises.clone(),
        ));

        Self {
            storage: web::Data::new(storage),
            franchises,
            branches,
            products,
        }
    }
}

/// Register shared state, extractor error handlers and every `/api` route
pub fn configure(cfg: &mut web::ServiceConfig, services: &AppServices) {
    cfg.app_data(services.storage.clone())
        .app_data(web::Data::new(services.franchises.clone()))
        .app_data(web::Data::new(services.branches.clone()))
        .app_data(web::Data::new(services.products.clone()))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .configure(health::configure)
                .configure(franchises::configure)
                .configure(branches::configure)
                .configure(products::configure),
        );
}
