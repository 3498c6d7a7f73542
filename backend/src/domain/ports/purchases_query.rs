//! Driving port for purchase aggregations.

use async_trait::async_trait;

use crate::domain::{Error, OrderDateInterval, OrderId, Purchase};

/// Domain use-case port assembling purchases from orders, users, and lines.
///
/// Every operation is all-or-nothing: a failure while assembling any purchase
/// fails the whole call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchasesQuery: Send + Sync {
    /// Purchases for every order, highest order id first.
    async fn get_all_orders_products(&self) -> Result<Vec<Purchase>, Error>;

    /// The purchase for a single order.
    async fn get_orders_products_by_order_id(&self, id: OrderId) -> Result<Vec<Purchase>, Error>;

    /// Purchases for orders dated within the interval, oldest first.
    async fn get_orders_products_by_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Purchase>, Error>;
}
