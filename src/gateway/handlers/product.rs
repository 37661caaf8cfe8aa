//! Product handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use super::brand::CreatedResponse;
use super::require_id_param;
use crate::product::{CreateProductRequest, ProductLookup, ProductView};

/// Create a product
///
/// POST /product
///
/// The referenced brand must exist.
#[utoipa::path(
    post,
    path = "/product",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = CreatedResponse, content_type = "application/json"),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Referenced brand does not exist"),
        (status = 500, description = "Malformed body or infrastructure failure")
    ),
    tag = "Product"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(request) = payload.map_err(|e| ApiError::internal(e.body_text()))?;
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let id = state.product_service.create(request).await?;
    ok(CreatedResponse { id })
}

/// Get a product by id, enriched with brand info
///
/// GET /product?id=1
#[utoipa::path(
    get,
    path = "/product",
    params(
        ("id" = i64, Query, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product details", body = ProductView, content_type = "application/json"),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Infrastructure failure")
    ),
    tag = "Product"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<ProductView> {
    let id = require_id_param(&params, "id")?;

    let product = state.product_service.get_product_by_id(id).await?;
    ok(product)
}

/// List the products of a brand
///
/// GET /product/brand?id=1
#[utoipa::path(
    get,
    path = "/product/brand",
    params(
        ("id" = i64, Query, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Products of the brand", body = [ProductView], content_type = "application/json"),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "No products for this brand"),
        (status = 500, description = "Infrastructure failure")
    ),
    tag = "Product"
)]
pub async fn get_products_by_brand(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<ProductView>> {
    let id = require_id_param(&params, "id")?;

    let products = state.product_service.get_products_by_brand(id).await?;
    ok(products)
}
