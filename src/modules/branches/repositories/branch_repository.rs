use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, InMemoryTable, Repository, Result};
use crate::modules::branches::models::Branch;

/// Persistence for branches
#[async_trait]
pub trait BranchRepository: Repository<Branch, i64> {
    /// All branches of a franchise, in id order
    async fn find_by_franchise_id(&self, franchise_id: i64) -> Result<Vec<Branch>>;
}

/// MySQL-backed branch repository
#[derive(Clone)]
pub struct MySqlBranchRepository {
    pool: MySqlPool,
}

impl MySqlBranchRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Branch, i64> for MySqlBranchRepository {
    async fn create(&self, entity: Branch) -> Result<Branch> {
        let result = sqlx::query("INSERT INTO branches (name, franchise_id) VALUES (?, ?)")
            .bind(&entity.name)
            .bind(entity.franchise_id)
            .execute(&self.pool)
            .await?;

        Ok(Branch {
            id: result.last_insert_id() as i64,
            ..entity
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Branch>> {
        let branch = sqlx::query_as::<_, Branch>(
            r#"
            SELECT id, name, franchise_id
            FROM branches
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(branch)
    }

    // franchise_id is not written: a branch never changes owner
    async fn update(&self, entity: &Branch) -> Result<Branch> {
        let result = sqlx::query("UPDATE branches SET name = ? WHERE id = ?")
            .bind(&entity.name)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        // MySQL reports 0 affected rows when the name is unchanged
        if result.rows_affected() == 0 && self.find_by_id(entity.id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Sucursal not found: {}",
                entity.id
            )));
        }

        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM branches WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl BranchRepository for MySqlBranchRepository {
    async fn find_by_franchise_id(&self, franchise_id: i64) -> Result<Vec<Branch>> {
        let branches = sqlx::query_as::<_, Branch>(
            r#"
            SELECT id, name, franchise_id
            FROM branches
            WHERE franchise_id = ?
            ORDER BY id
            "#,
        )
        .bind(franchise_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(branches)
    }
}

/// Branch repository kept in process memory
#[derive(Default)]
pub struct InMemoryBranchRepository {
    table: InMemoryTable<Branch>,
}

impl InMemoryBranchRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Branch, i64> for InMemoryBranchRepository {
    async fn create(&self, entity: Branch) -> Result<Branch> {
        Ok(self.table.insert_with(entity, |row, id| row.id = id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Branch>> {
        Ok(self.table.get(id))
    }

    async fn update(&self, entity: &Branch) -> Result<Branch> {
        // Keep the stored owner even if the caller's copy drifted
        let stored = match self.table.get(entity.id) {
            Some(stored) => Branch {
                name: entity.name.clone(),
                ..stored
            },
            None => {
                return Err(AppError::not_found(format!(
                    "Sucursal not found: {}",
                    entity.id
                )))
            }
        };
        if !self.table.replace(stored.id, stored.clone()) {
            return Err(AppError::not_found(format!(
                "Sucursal not found: {}",
                entity.id
            )));
        }
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.table.remove(id);
        Ok(())
    }
}

#[async_trait]
impl BranchRepository for InMemoryBranchRepository {
    async fn find_by_franchise_id(&self, franchise_id: i64) -> Result<Vec<Branch>> {
        Ok(self.table.filter(|branch| branch.franchise_id == franchise_id))
    }
}
