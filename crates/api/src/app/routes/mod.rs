use axum::{
    Router,
    routing::{get, post},
};

pub mod products;
pub mod system;

/// Product resource routes.
///
/// The `{id}` segment is handed to handlers as a raw string; parsing it is
/// the handler's job.
pub fn router() -> Router {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/product", post(products::create_product))
        .route(
            "/product/:id",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
}
