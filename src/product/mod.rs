//! Product catalog
//!
//! Products carry the authoritative unit price the order workflow copies at
//! order time. Reads are always enriched with the owning brand.

pub mod repository;
pub mod service;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Brand info embedded in a product read
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandRef {
    pub id: i64,
    pub title: String,
}

/// A product row joined with its brand
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub brand: BrandRef,
    #[schema(value_type = f64, example = 25000000)]
    pub price: Decimal,
}

/// Payload for `POST /product`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 1, message = "brandId must be positive"))]
    pub brand_id: i64,
    #[validate(custom(function = validate_price))]
    #[schema(value_type = f64, example = 25000000)]
    pub price: Decimal,
}

fn validate_price(price: &Decimal) -> Result<(), validator::ValidationError> {
    if price.is_sign_positive() && !price.is_zero() {
        Ok(())
    } else {
        Err(validator::ValidationError::new("price")
            .with_message("price must be positive".into()))
    }
}

/// Filter for product lookups; unset fields are not constrained.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub id: Option<i64>,
    pub brand_id: Option<i64>,
    pub limit: Option<i64>,
}

impl ProductFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            limit: Some(1),
            ..Self::default()
        }
    }

    pub fn by_brand(brand_id: i64) -> Self {
        Self {
            brand_id: Some(brand_id),
            ..Self::default()
        }
    }
}

pub use repository::{ProductRepository, ProductStore};
pub use service::{ProductLookup, ProductService};
