//! Integration tests for the Postgres product store.
//!
//! These run against a real database and are skipped unless
//! `TEST_DATABASE_URL` is set. The table is shared between tests, so each
//! test only asserts on rows it created itself.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use stockroom_products::{ProductDraft, ProductId};

    use crate::config::DatabaseConfig;
    use crate::db::{connect_pool, run_migrations};
    use crate::product_store::{PostgresProductStore, ProductStore};

    async fn setup() -> Option<PostgresProductStore> {
        let url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set; skipping postgres test");
                return None;
            }
        };
        let config = DatabaseConfig {
            url,
            max_connections: 2,
            acquire_timeout: Duration::from_secs(5),
            run_migrations: true,
        };
        let pool = connect_pool(&config).await.expect("failed to connect to TEST_DATABASE_URL");
        run_migrations(&pool).await.expect("failed to apply migrations");
        Some(PostgresProductStore::new(pool))
    }

    #[tokio::test]
    async fn insert_then_fetch_round_trips_fields() {
        let Some(store) = setup().await else { return };

        let created = store.insert(&ProductDraft::new("keyboard", 300, 120.0)).await.unwrap();
        assert!(created.id.0.is_assigned());

        let fetched = store.fetch_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn names_with_quotes_are_stored_verbatim() {
        let Some(store) = setup().await else { return };

        let name = "Robert'); DROP TABLE products;--";
        let created = store.insert(&ProductDraft::new(name, 1, 1.5)).await.unwrap();

        let fetched = store.fetch_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, name);
    }

    #[tokio::test]
    async fn ids_increase_across_inserts() {
        let Some(store) = setup().await else { return };

        let a = store.insert(&ProductDraft::new("a", 1, 1.0)).await.unwrap();
        let b = store.insert(&ProductDraft::new("b", 1, 1.0)).await.unwrap();
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let Some(store) = setup().await else { return };

        let created = store.insert(&ProductDraft::new("Keyboard", 100, 199.0)).await.unwrap();
        let new_values = ProductDraft::new("Keyboard", 200, 199.0);

        assert_eq!(store.update_by_id(created.id, &new_values).await.unwrap(), 1);
        let fetched = store.fetch_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.quantity, 200);

        assert_eq!(store.delete_by_id(created.id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(created.id).await.unwrap(), 0);
        assert_eq!(store.update_by_id(created.id, &new_values).await.unwrap(), 0);
        assert!(store.fetch_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let Some(store) = setup().await else { return };

        let missing = ProductId::from(i64::MAX);
        assert!(store.fetch_by_id(missing).await.unwrap().is_none());
        assert_eq!(store.delete_by_id(missing).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn fetch_all_includes_every_inserted_row() {
        let Some(store) = setup().await else { return };

        let mut ids = Vec::new();
        for i in 0..3 {
            ids.push(store.insert(&ProductDraft::new(format!("bulk-{i}"), i, 1.0)).await.unwrap().id);
        }

        let all = store.fetch_all().await.unwrap();
        for id in ids {
            assert!(all.iter().any(|p| p.id == id));
        }
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }
}
