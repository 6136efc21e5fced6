use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, InMemoryTable, Repository, Result};
use crate::modules::franchises::models::Franchise;

/// Persistence for franchises
#[async_trait]
pub trait FranchiseRepository: Repository<Franchise, i64> {}

/// MySQL-backed franchise repository
#[derive(Clone)]
pub struct MySqlFranchiseRepository {
    pool: MySqlPool,
}

impl MySqlFranchiseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Franchise, i64> for MySqlFranchiseRepository {
    async fn create(&self, entity: Franchise) -> Result<Franchise> {
        let result = sqlx::query("INSERT INTO franchises (name) VALUES (?)")
            .bind(&entity.name)
            .execute(&self.pool)
            .await?;

        Ok(Franchise {
            id: result.last_insert_id() as i64,
            ..entity
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Franchise>> {
        let franchise = sqlx::query_as::<_, Franchise>(
            r#"
            SELECT id, name
            FROM franchises
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(franchise)
    }

    async fn update(&self, entity: &Franchise) -> Result<Franchise> {
        let result = sqlx::query("UPDATE franchises SET name = ? WHERE id = ?")
            .bind(&entity.name)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        // MySQL reports 0 affected rows when the name is unchanged
        if result.rows_affected() == 0 && self.find_by_id(entity.id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Franquicia not found: {}",
                entity.id
            )));
        }

        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM franchises WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

impl FranchiseRepository for MySqlFranchiseRepository {}

/// Franchise repository kept in process memory
#[derive(Default)]
pub struct InMemoryFranchiseRepository {
    table: InMemoryTable<Franchise>,
}

impl InMemoryFranchiseRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Franchise, i64> for InMemoryFranchiseRepository {
    async fn create(&self, entity: Franchise) -> Result<Franchise> {
        Ok(self.table.insert_with(entity, |row, id| row.id = id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Franchise>> {
        Ok(self.table.get(id))
    }

    async fn update(&self, entity: &Franchise) -> Result<Franchise> {
        if !self.table.replace(entity.id, entity.clone()) {
            return Err(AppError::not_found(format!(
                "Franquicia not found: {}",
                entity.id
            )));
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.table.remove(id);
        Ok(())
    }
}

impl FranchiseRepository for InMemoryFranchiseRepository {}
