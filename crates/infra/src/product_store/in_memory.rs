use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockroom_products::{Product, ProductDraft, ProductId};

use super::{ProductStore, StoreError};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory product table for tests/dev.
///
/// Ids start at 1 and are never reused, matching an identity column.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("in-memory product table lock poisoned".to_string())
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let table = self.inner.read().map_err(poisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let table = self.inner.read().map_err(poisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let mut table = self.inner.write().map_err(poisoned)?;
        table.last_id += 1;
        let product = Product::from_draft(ProductId::from(table.last_id), draft.clone());
        table.rows.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update_by_id(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError> {
        let mut table = self.inner.write().map_err(poisoned)?;
        match table.rows.get_mut(&id) {
            Some(row) => {
                *row = Product::from_draft(id, draft.clone());
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError> {
        let mut table = self.inner.write().map_err(poisoned)?;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}
