//! Brand catalog
//!
//! Brands are the root of the catalog hierarchy: a product references a brand
//! and the order read-model joins brand titles in for display.

pub mod repository;
pub mod service;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// A stored brand row
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Brand {
    pub id: i64,
    pub title: String,
}

/// Payload for `POST /brand`
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBrandRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
}

/// Filter for brand lookups; unset fields are not constrained.
#[derive(Debug, Clone, Default)]
pub struct BrandFilter {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub limit: Option<i64>,
}

impl BrandFilter {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            limit: Some(1),
            ..Self::default()
        }
    }

    pub fn by_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            limit: Some(1),
            ..Self::default()
        }
    }
}

pub use repository::{BrandRepository, BrandStore};
pub use service::{BrandLookup, BrandService};
