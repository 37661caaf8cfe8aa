//! Order placement and lookup
//!
//! The one place in the system with a real invariant: an order header and all
//! of its detail rows are written atomically, and the unit price stored on a
//! line is frozen at order time.

pub mod repository;
pub mod service;
pub mod trx;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::ServiceError;

/// Payload for `POST /order`
///
/// Prices are never accepted from the caller; only product id and quantity.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[validate(length(min = 1, message = "deliveryAddress is required"))]
    pub delivery_address: String,
    #[validate(length(min = 1, message = "details must contain at least one row"))]
    pub details: Vec<OrderLineRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    #[validate(range(min = 1, message = "productId must be positive"))]
    pub product_id: i64,
    #[validate(range(min = 1, message = "qty must be positive"))]
    pub qty: i64,
}

/// An order header ready for insert; totals already accumulated.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub transaction_number: String,
    pub delivery_address: String,
    pub total_qty: i64,
    pub total_transaction: Decimal,
}

/// A line with its price resolved at order time
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLine {
    pub product_id: i64,
    pub qty: i64,
    pub price: Decimal,
    pub total: Decimal,
}

/// Result of a successful placement
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedOrder {
    pub id: i64,
    pub transaction_number: String,
}

/// Composed read-model returned by `GET /order`
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i64,
    pub delivery_address: String,
    pub transaction_number: String,
    #[schema(value_type = f64, example = 50000000)]
    pub total_transaction: Decimal,
    pub total_qty: i64,
    pub details: Vec<OrderDetailView>,
}

/// One display row: line joined with product and brand titles
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailView {
    pub id: i64,
    pub product_name: String,
    pub brand_name: String,
    pub qty: i64,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[schema(value_type = f64)]
    pub total: Decimal,
}

/// Structural validation of an order request.
///
/// Runs before any lookup or storage call. Per-line failures carry the
/// 1-based row index so the caller can tell which entry was rejected.
pub fn validate_order_request(request: &OrderRequest) -> Result<(), ServiceError> {
    request
        .validate()
        .map_err(|e| ServiceError::validation(describe(&e)))?;

    for (i, line) in request.details.iter().enumerate() {
        line.validate().map_err(|e| {
            ServiceError::validation(format!("error row {}: {}", i + 1, describe(&e)))
        })?;
    }

    Ok(())
}

fn describe(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{} is invalid", field),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

pub use repository::{OrderRepository, OrderStore};
pub use service::OrderService;
pub use trx::generate_transaction_number;

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> OrderRequest {
        OrderRequest {
            delivery_address: "Indonesia".to_string(),
            details: vec![OrderLineRequest {
                product_id: 1,
                qty: 2,
            }],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate_order_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_empty_delivery_address_rejected() {
        let mut request = valid_request();
        request.delivery_address = String::new();

        let err = validate_order_request(&request).unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert!(msg.contains("deliveryAddress")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_details_rejected() {
        let mut request = valid_request();
        request.details.clear();
        assert!(matches!(
            validate_order_request(&request),
            Err(ServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_line_error_carries_row_index() {
        let mut request = valid_request();
        request.details.push(OrderLineRequest {
            product_id: 2,
            qty: 0,
        });

        let err = validate_order_request(&request).unwrap_err();
        match err {
            ServiceError::Validation(msg) => {
                assert!(msg.contains("row 2"), "message was: {}", msg);
                assert!(msg.contains("qty"), "message was: {}", msg);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_positive_product_id_rejected() {
        let mut request = valid_request();
        request.details[0].product_id = 0;

        let err = validate_order_request(&request).unwrap_err();
        match err {
            ServiceError::Validation(msg) => {
                assert!(msg.contains("row 1"), "message was: {}", msg)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
