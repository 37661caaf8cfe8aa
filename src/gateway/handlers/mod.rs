//! HTTP handlers

pub mod brand;
pub mod health;
pub mod order;
pub mod product;

pub use brand::{create_brand, get_brands};
pub use health::health_check;
pub use order::{create_order, get_order};
pub use product::{create_product, get_product, get_products_by_brand};

use std::collections::HashMap;

use super::types::ApiError;

/// Parse a required positive integer query parameter.
pub(crate) fn require_id_param(
    params: &HashMap<String, String>,
    name: &str,
) -> Result<i64, ApiError> {
    params
        .get(name)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::validation(format!("missing or invalid {} parameter", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_id_param() {
        let mut params = HashMap::new();
        assert!(require_id_param(&params, "id").is_err());

        params.insert("id".to_string(), "abc".to_string());
        assert!(require_id_param(&params, "id").is_err());

        params.insert("id".to_string(), "0".to_string());
        assert!(require_id_param(&params, "id").is_err());

        params.insert("id".to_string(), "42".to_string());
        assert_eq!(require_id_param(&params, "id").unwrap(), 42);
    }
}
