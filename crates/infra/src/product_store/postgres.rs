//! Postgres-backed product store.
//!
//! Every statement binds its inputs (`$1`, `$2`, ...); caller-supplied text is
//! never spliced into SQL.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | `PoolClosed`, `PoolTimedOut`, `Io`, `Tls` | `Unavailable` |
//! | `ColumnDecode`, `ColumnNotFound`, `Decode` | `Decode` |
//! | `Database` and anything else | `Database` |

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use stockroom_products::{Product, ProductDraft, ProductId};

use super::{ProductStore, StoreError};

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i32,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from(row.id),
            name: row.name,
            quantity: row.quantity,
            price: row.price,
        }
    }
}

/// Product store over a shared `PgPool`.
///
/// The pool is cheap to clone and safe to share across request tasks.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), fields(id = %id), err)]
    async fn fetch_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, quantity, price
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("fetch_by_id", e))?;

        Ok(row.map(Product::from))
    }

    #[instrument(skip(self), err)]
    async fn fetch_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, quantity, price
            FROM products
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("fetch_all", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name), err)]
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, quantity, price)
            VALUES ($1, $2, $3)
            RETURNING id, name, quantity, price
            "#,
        )
        .bind(&draft.name)
        .bind(draft.quantity)
        .bind(draft.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        Ok(row.into())
    }

    #[instrument(skip(self, draft), fields(id = %id), err)]
    async fn update_by_id(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $1, quantity = $2, price = $3
            WHERE id = $4
            "#,
        )
        .bind(&draft.name)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_by_id", e))?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete_by_id(&self, id: ProductId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;

        Ok(result.rows_affected())
    }
}

/// Map a SQLx error to `StoreError`, tagging it with the operation name.
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            StoreError::Database(format!(
                "{} failed [{}]: {}",
                operation,
                code,
                db_err.message()
            ))
        }
        sqlx::Error::PoolClosed | sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("{}: {}", operation, err))
        }
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            StoreError::Unavailable(format!("{}: {}", operation, err))
        }
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => StoreError::Decode(format!("{}: {}", operation, err)),
        _ => StoreError::Database(format!("sqlx error in {}: {}", operation, err)),
    }
}
