use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use stockroom_products::{Product, ProductDraft, ProductId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

/// Parse the raw `{id}` segment, or produce the 400 response.
fn parse_id(raw: &str) -> Result<ProductId, Response> {
    raw.parse::<ProductId>()
        .map_err(errors::domain_error_to_response)
}

fn parse_body(body: &[u8]) -> Result<ProductDraft, Response> {
    ProductDraft::from_json(body).map_err(errors::domain_error_to_response)
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.products().fetch_all().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => errors::store_error_to_response("fetch_all", e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products().fetch_by_id(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(product)).into_response(),
        Ok(None) => errors::not_found("product not found"),
        Err(e) => errors::store_error_to_response("fetch_by_id", e),
    }
}

// The body is decoded from raw bytes; Content-Type is not inspected.
pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> Response {
    let draft = match parse_body(&body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products().insert(&draft).await {
        Ok(product) => {
            tracing::debug!(id = %product.id, "product created");
            (StatusCode::CREATED, Json(product)).into_response()
        }
        Err(e) => errors::store_error_to_response("insert", e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };
    let draft = match parse_body(&body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products().update_by_id(id, &draft).await {
        Ok(0) => errors::not_found("product not found"),
        Ok(_) => (StatusCode::OK, Json(Product::from_draft(id, draft))).into_response(),
        Err(e) => errors::store_error_to_response("update_by_id", e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products().delete_by_id(id).await {
        Ok(0) => errors::not_found("product not found"),
        Ok(_) => (StatusCode::OK, Json(dto::DeletionResponse::successful())).into_response(),
        Err(e) => errors::store_error_to_response("delete_by_id", e),
    }
}
