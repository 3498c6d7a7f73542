//! Port for priced order lines.

use async_trait::async_trait;

use crate::domain::{OrderId, OrderProduct};

use super::define_port_error;

define_port_error! {
    /// Errors raised by order product repository adapters.
    pub enum OrderProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "order product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "order product repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderProductRepository: Send + Sync {
    /// Append an order line. Lines are never deduplicated.
    async fn insert(&self, line: &OrderProduct) -> Result<(), OrderProductRepositoryError>;

    /// Every line recorded for an order, in insertion order.
    async fn list_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderProduct>, OrderProductRepositoryError>;
}
