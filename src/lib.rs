//! simple_commerce - A small e-commerce backend
//!
//! Brands, products and transactional order placement over PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool
//! - [`error`] - Closed service error type
//! - [`brand`] - Brand catalog (create, filtered lookup)
//! - [`product`] - Product catalog, enriched with brand info
//! - [`order`] - Order placement and lookup (the transactional core)
//! - [`gateway`] - Axum HTTP surface

pub mod config;
pub mod db;
pub mod error;
pub mod logging;

pub mod brand;
pub mod order;
pub mod product;

pub mod gateway;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use error::{ServiceError, ServiceResult};
