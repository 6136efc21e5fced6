use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, InMemoryTable, Repository, Result};
use crate::modules::products::models::Product;

/// Persistence for products
#[async_trait]
pub trait ProductRepository: Repository<Product, i64> {
    /// All products of a branch, in id order
    async fn find_by_branch_id(&self, branch_id: i64) -> Result<Vec<Product>>;

    /// True only when the product exists and is held by `branch_id`
    async fn exists_by_id_and_branch_id(&self, product_id: i64, branch_id: i64) -> Result<bool>;

    /// The branch's product with the greatest stock; ties go to the lowest id
    async fn find_max_stock_by_branch_id(&self, branch_id: i64) -> Result<Option<Product>>;
}

/// MySQL-backed product repository
#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product, i64> for MySqlProductRepository {
    async fn create(&self, entity: Product) -> Result<Product> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, stock, branch_id)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.stock)
        .bind(entity.branch_id)
        .execute(&self.pool)
        .await?;

        Ok(Product {
            id: result.last_insert_id() as i64,
            ..entity
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, stock, branch_id
            FROM products
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, entity: &Product) -> Result<Product> {
        let result = sqlx::query("UPDATE products SET name = ?, stock = ? WHERE id = ?")
            .bind(&entity.name)
            .bind(entity.stock)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        // MySQL reports 0 affected rows when nothing changed
        if result.rows_affected() == 0 && self.find_by_id(entity.id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Producto not found: {}",
                entity.id
            )));
        }

        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_branch_id(&self, branch_id: i64) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, stock, branch_id
            FROM products
            WHERE branch_id = ?
            ORDER BY id
            "#,
        )
        .bind(branch_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn exists_by_id_and_branch_id(&self, product_id: i64, branch_id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products
            WHERE id = ? AND branch_id = ?
            "#,
        )
        .bind(product_id)
        .bind(branch_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    async fn find_max_stock_by_branch_id(&self, branch_id: i64) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, stock, branch_id
            FROM products
            WHERE branch_id = ?
            ORDER BY stock DESC, id ASC
            LIMIT 1
            "#,
        )
        .bind(branch_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }
}

/// Product repository kept in process memory
#[derive(Default)]
pub struct InMemoryProductRepository {
    table: InMemoryTable<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Product, i64> for InMemoryProductRepository {
    async fn create(&self, entity: Product) -> Result<Product> {
        Ok(self.table.insert_with(entity, |row, id| row.id = id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.table.get(id))
    }

    async fn update(&self, entity: &Product) -> Result<Product> {
        // Only name and stock are mutable
        let stored = match self.table.get(entity.id) {
            Some(stored) => Product {
                name: entity.name.clone(),
                stock: entity.stock,
                ..stored
            },
            None => {
                return Err(AppError::not_found(format!(
                    "Producto not found: {}",
                    entity.id
                )))
            }
        };
        if !self.table.replace(stored.id, stored.clone()) {
            return Err(AppError::not_found(format!(
                "Producto not found: {}",
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
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_branch_id(&self, branch_id: i64) -> Result<Vec<Product>> {
        Ok(self.table.filter(|product| product.branch_id == branch_id))
    }

    async fn exists_by_id_and_branch_id(&self, product_id: i64, branch_id: i64) -> Result<bool> {
        Ok(self
            .table
            .any(|product| product.id == product_id && product.branch_id == branch_id))
    }

    async fn find_max_stock_by_branch_id(&self, branch_id: i64) -> Result<Option<Product>> {
        let products = self.find_by_branch_id(branch_id).await?;

        Ok(products
            .into_iter()
            .max_by(|a, b| a.stock.cmp(&b.stock).then_with(|| b.id.cmp(&a.id))))
    }
}
