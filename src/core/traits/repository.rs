use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for id-keyed persistence.
/// Entity repositories extend it with their parent-scoped queries.
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Persist a new entity. The id carried by `entity` is ignored;
    /// the returned entity holds the store-assigned id.
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Overwrite the mutable fields of an existing entity
    async fn update(&self, entity: &T) -> Result<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: ID) -> Result<()>;
}
