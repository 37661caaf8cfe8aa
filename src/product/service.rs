//! Product business rules

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::{CreateProductRequest, ProductFilter, ProductStore, ProductView};
use crate::brand::BrandLookup;
use crate::error::{ServiceError, ServiceResult, bounded};

/// Product resolution consumed by the order service
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Resolve a product with its current price, or `NotFound`.
    async fn get_product_by_id(&self, id: i64) -> ServiceResult<ProductView>;
}

pub struct ProductService {
    store: Arc<dyn ProductStore>,
    brands: Arc<dyn BrandLookup>,
    timeout: Duration,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>, brands: Arc<dyn BrandLookup>, timeout: Duration) -> Self {
        Self {
            store,
            brands,
            timeout,
        }
    }

    /// Create a product after confirming the referenced brand exists.
    pub async fn create(&self, payload: CreateProductRequest) -> ServiceResult<i64> {
        bounded(self.timeout, async {
            self.brands.check_brand_by_id(payload.brand_id).await?;

            let id = self.store.create(&payload).await?;
            tracing::info!(product_id = id, title = %payload.title, "product created");
            Ok(id)
        })
        .await
    }

    pub async fn get_products_by_brand(&self, brand_id: i64) -> ServiceResult<Vec<ProductView>> {
        bounded(self.timeout, async {
            let products = self.store.get_products(&ProductFilter::by_brand(brand_id)).await?;
            if products.is_empty() {
                return Err(ServiceError::not_found(format!(
                    "no products for brand {}",
                    brand_id
                )));
            }
            Ok(products)
        })
        .await
    }
}

#[async_trait]
impl ProductLookup for ProductService {
    async fn get_product_by_id(&self, id: i64) -> ServiceResult<ProductView> {
        bounded(self.timeout, async {
            let mut products = self.store.get_products(&ProductFilter::by_id(id)).await?;
            match products.pop() {
                Some(product) => Ok(product),
                None => Err(ServiceError::not_found(format!("product {} not found", id))),
            }
        })
        .await
    }
}
