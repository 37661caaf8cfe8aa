//! Brand handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use crate::brand::{Brand, BrandFilter, CreateBrandRequest};

/// Identity of a newly created row
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Create a brand
///
/// POST /brand
#[utoipa::path(
    post,
    path = "/brand",
    request_body = CreateBrandRequest,
    responses(
        (status = 200, description = "Brand created", body = CreatedResponse, content_type = "application/json"),
        (status = 400, description = "Validation failure or duplicate title"),
        (status = 500, description = "Malformed body or infrastructure failure")
    ),
    tag = "Brand"
)]
pub async fn create_brand(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateBrandRequest>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(request) = payload.map_err(|e| ApiError::internal(e.body_text()))?;
    request
        .validate()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let id = state.brand_service.create(&request.title).await?;
    ok(CreatedResponse { id })
}

/// List brands, optionally filtered
///
/// GET /brand?id=&title=&limit=
#[utoipa::path(
    get,
    path = "/brand",
    params(
        ("id" = Option<i64>, Query, description = "Brand ID"),
        ("title" = Option<String>, Query, description = "Exact title"),
        ("limit" = Option<i64>, Query, description = "Row limit")
    ),
    responses(
        (status = 200, description = "Matching brands", body = [Brand], content_type = "application/json"),
        (status = 500, description = "Infrastructure failure")
    ),
    tag = "Brand"
)]
pub async fn get_brands(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Vec<Brand>> {
    let filter = BrandFilter {
        id: params.get("id").and_then(|s| s.parse().ok()),
        title: params.get("title").cloned(),
        limit: params.get("limit").and_then(|s| s.parse().ok()),
    };

    let brands = state.brand_service.get_brands(filter).await?;
    ok(brands)
}
