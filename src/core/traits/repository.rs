use crate::core::error::Result;
use async_trait::async_trait;

/// Base repository trait for CRUD operations
/// All repositories should implement this trait for consistency
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Create a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Update an existing entity
    async fn update(&self, id: ID, entity: T) -> Result<T>;

    /// Delete an entity by ID
    async fn delete(&self, id: ID) -> Result<()>;

    /// List all entities
    async fn list(&self) -> Result<Vec<T>>;
}
