use std::sync::Arc;

use crate::brand::BrandService;
use crate::db::Database;
use crate::order::OrderService;
use crate::product::ProductService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    pub brand_service: Arc<BrandService>,
    pub product_service: Arc<ProductService>,
    pub order_service: Arc<OrderService>,
    /// Pool handle for health checks
    pub db: Database,
}

impl AppState {
    pub fn new(
        brand_service: Arc<BrandService>,
        product_service: Arc<ProductService>,
        order_service: Arc<OrderService>,
        db: Database,
    ) -> Self {
        Self {
            brand_service,
            product_service,
            order_service,
            db,
        }
    }
}
