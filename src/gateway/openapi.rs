//! OpenAPI document served at /docs

use utoipa::OpenApi;

use super::handlers;
use crate::brand::{Brand, CreateBrandRequest};
use crate::order::{OrderDetailView, OrderLineRequest, OrderRequest, OrderView, PlacedOrder};
use crate::product::{BrandRef, CreateProductRequest, ProductView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "simple_commerce API",
        description = "Brands, products and transactional order placement"
    ),
    paths(
        handlers::health::health_check,
        handlers::brand::create_brand,
        handlers::brand::get_brands,
        handlers::product::create_product,
        handlers::product::get_product,
        handlers::product::get_products_by_brand,
        handlers::order::create_order,
        handlers::order::get_order,
    ),
    components(schemas(
        Brand,
        CreateBrandRequest,
        BrandRef,
        ProductView,
        CreateProductRequest,
        OrderRequest,
        OrderLineRequest,
        OrderView,
        OrderDetailView,
        PlacedOrder,
        handlers::brand::CreatedResponse,
        handlers::health::HealthResponse,
    )),
    tags(
        (name = "System", description = "Liveness"),
        (name = "Brand", description = "Brand catalog"),
        (name = "Product", description = "Product catalog"),
        (name = "Order", description = "Order placement and lookup")
    )
)]
pub struct ApiDoc;
