use std::sync::Arc;

use anyhow::Context;

use stockroom_infra::{
    InMemoryProductStore, PostgresProductStore, ProductStore,
    config::AppConfig,
    db::{connect_pool, run_migrations},
};

/// Collaborators the handlers depend on.
///
/// Handlers never reach for a global; the router is built around one of these.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// Services backed by an empty in-memory product table (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()))
    }

    pub fn products(&self) -> &dyn ProductStore {
        self.products.as_ref()
    }
}

/// Select and connect the product store described by `config`.
///
/// Postgres when `DATABASE_URL` is configured, otherwise in-memory.
pub async fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let Some(db) = &config.database else {
        tracing::warn!("DATABASE_URL not set; using in-memory product store");
        return Ok(AppServices::in_memory());
    };

    let pool = connect_pool(db)
        .await
        .context("failed to connect to Postgres")?;

    if db.run_migrations {
        run_migrations(&pool)
            .await
            .context("failed to apply migrations")?;
    }

    Ok(AppServices::new(Arc::new(PostgresProductStore::new(pool))))
}
