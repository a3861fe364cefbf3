//! Infrastructure layer: product persistence, DB pool wiring, config.

pub mod config;
pub mod db;
pub mod product_store;

mod integration_tests;

pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
