//! Order handlers (placement, lookup)

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use super::require_id_param;
use crate::order::{OrderRequest, OrderView, PlacedOrder};

/// Place an order
///
/// POST /order
///
/// Prices are resolved server-side from the product catalog; the body only
/// names products and quantities.
#[utoipa::path(
    post,
    path = "/order",
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlacedOrder, content_type = "application/json"),
        (status = 400, description = "Validation failure (message carries the 1-based row index for line errors)"),
        (status = 404, description = "A referenced product does not exist"),
        (status = 500, description = "Malformed body or infrastructure failure")
    ),
    tag = "Order"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<OrderRequest>, JsonRejection>,
) -> ApiResult<PlacedOrder> {
    // Malformed or absent body is reported as a system error, matching the
    // envelope contract rather than axum's default rejection.
    let Json(request) = payload.map_err(|e| ApiError::internal(e.body_text()))?;

    let placed = state.order_service.place_order(request).await?;
    ok(placed)
}

/// Get a composed order view by id
///
/// GET /order?id=1
#[utoipa::path(
    get,
    path = "/order",
    params(
        ("id" = i64, Query, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with ordered detail rows", body = OrderView, content_type = "application/json"),
        (status = 400, description = "Missing or invalid id"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Infrastructure failure")
    ),
    tag = "Order"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<OrderView> {
    let id = require_id_param(&params, "id")?;

    let view = state.order_service.get_order(id).await?;
    ok(view)
}
