//! Axum HTTP surface
//!
//! Wires repositories into services (dependency inversion: services see only
//! the storage/lookup traits) and exposes the routes.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::brand::{BrandLookup, BrandRepository, BrandService};
use crate::config::AppConfig;
use crate::db::Database;
use crate::order::{OrderRepository, OrderService};
use crate::product::{ProductLookup, ProductRepository, ProductService};
use state::AppState;

/// Build the shared state: repositories behind their traits, services on top.
pub fn build_state(config: &AppConfig, db: Database) -> AppState {
    let timeout = Duration::from_millis(config.service.timeout_ms);

    let brand_service = Arc::new(BrandService::new(
        Arc::new(BrandRepository::new(db.pool().clone())),
        timeout,
    ));

    let product_service = Arc::new(ProductService::new(
        Arc::new(ProductRepository::new(db.pool().clone())),
        brand_service.clone() as Arc<dyn BrandLookup>,
        timeout,
    ));

    let order_service = Arc::new(OrderService::new(
        Arc::new(OrderRepository::new(db.pool().clone())),
        product_service.clone() as Arc<dyn ProductLookup>,
        timeout,
    ));

    AppState::new(brand_service, product_service, order_service, db)
}

/// Start the HTTP gateway server
pub async fn run_server(config: &AppConfig, db: Database) {
    let state = Arc::new(build_state(config, db));

    let app = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/brand",
            post(handlers::create_brand).get(handlers::get_brands),
        )
        .route(
            "/product",
            post(handlers::create_product).get(handlers::get_product),
        )
        .route("/product/brand", get(handlers::get_products_by_brand))
        .route(
            "/order",
            post(handlers::create_order).get(handlers::get_order),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("FATAL: failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("API docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("FATAL: server error: {}", e);
        std::process::exit(1);
    }
}
