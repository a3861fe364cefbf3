//! Product persistence: the `ProductStore` seam plus its backends.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use stockroom_products::{Product, ProductDraft, ProductId};

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;

/// Backend failure raised by a product store.
///
/// "No matching row" is never an error here: reads return `Ok(None)` and
/// id-scoped mutations return `Ok(0)` rows affected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The statement reached the store and was rejected (constraint, syntax, ...).
    #[error("database error: {0}")]
    Database(String),

    /// The store could not be reached (pool closed, timeout, I/O, poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A row came back but could not be mapped to a product.
    #[error("row decode failed: {0}")]
    Decode(String),
}

/// Persistence operations for the `products` table.
///
/// Every operation is a single statement against the backing store; there is
/// no cross-call transaction and no retry.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Fetch one product. `Ok(None)` when no row has this id.
    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Fetch every product, ordered by id. Empty table yields an empty vec.
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Insert a new row; the store assigns the id.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError>;

    /// Overwrite `name`, `quantity` and `price` of the row with this id.
    /// Returns rows affected (0 or 1).
    async fn update_by_id(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError>;

    /// Remove the row with this id. Returns rows affected (0 or 1).
    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).fetch_by_id(id).await
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).fetch_all().await
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        (**self).insert(draft).await
    }

    async fn update_by_id(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError> {
        (**self).update_by_id(id, draft).await
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError> {
        (**self).delete_by_id(id).await
    }
}
