//! Order orchestration
//!
//! Turns an [`OrderRequest`] into a persisted order: structural validation,
//! per-line price resolution through the product service, total accumulation,
//! transaction number generation and one atomic write.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;

use super::{
    NewOrder, OrderRequest, OrderStore, OrderView, PlacedOrder, ResolvedLine,
    generate_transaction_number, validate_order_request,
};
use crate::error::{ServiceError, ServiceResult, bounded};
use crate::product::ProductLookup;

pub struct OrderService {
    store: Arc<dyn OrderStore>,
    products: Arc<dyn ProductLookup>,
    timeout: Duration,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        products: Arc<dyn ProductLookup>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            products,
            timeout,
        }
    }

    /// Place an order.
    ///
    /// Lines are resolved in caller order and the first unresolved line stops
    /// processing; nothing is persisted unless every line resolved. Unit
    /// prices come from the product service at this moment and are stored
    /// frozen on the lines.
    pub async fn place_order(&self, request: OrderRequest) -> ServiceResult<PlacedOrder> {
        bounded(self.timeout, async {
            validate_order_request(&request)?;

            let mut lines = Vec::with_capacity(request.details.len());
            let mut total_qty: i64 = 0;
            let mut total_transaction = Decimal::ZERO;

            for (i, detail) in request.details.iter().enumerate() {
                let product = self
                    .products
                    .get_product_by_id(detail.product_id)
                    .await
                    .map_err(|err| match err {
                        ServiceError::NotFound(_) => ServiceError::not_found(format!(
                            "row {}: product {} not found",
                            i + 1,
                            detail.product_id
                        )),
                        other => other,
                    })?;

                let price = product.price;
                let total = price * Decimal::from(detail.qty);
                total_qty += detail.qty;
                total_transaction += total;

                lines.push(ResolvedLine {
                    product_id: detail.product_id,
                    qty: detail.qty,
                    price,
                    total,
                });
            }

            let transaction_number = generate_transaction_number();
            let order = NewOrder {
                transaction_number: transaction_number.clone(),
                delivery_address: request.delivery_address.clone(),
                total_qty,
                total_transaction,
            };

            let id = self.store.create_order(&order, &lines).await?;
            tracing::info!(
                order_id = id,
                %transaction_number,
                total_qty,
                %total_transaction,
                lines = lines.len(),
                "order placed"
            );

            Ok(PlacedOrder {
                id,
                transaction_number,
            })
        })
        .await
    }

    /// Fetch a composed order view by id.
    pub async fn get_order(&self, id: i64) -> ServiceResult<OrderView> {
        bounded(self.timeout, async {
            match self.store.get_order_details(id).await? {
                Some(view) => Ok(view),
                None => Err(ServiceError::not_found(format!("order {} not found", id))),
            }
        })
        .await
    }
}
