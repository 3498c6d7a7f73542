//! Driving port for order lookups.

use async_trait::async_trait;

use crate::domain::{Error, Order, OrderDateInterval, OrderId};

/// Domain use-case port for reading orders without their lines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrdersQuery: Send + Sync {
    /// Return one order, or `order_not_found`.
    async fn get_order_by_id(&self, id: OrderId) -> Result<Order, Error>;

    /// Orders dated within the interval, oldest first; `no_orders` when empty.
    async fn get_orders_in_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Order>, Error>;

    /// Every order, highest id first; `no_orders` when empty.
    async fn get_all_orders(&self) -> Result<Vec<Order>, Error>;
}
