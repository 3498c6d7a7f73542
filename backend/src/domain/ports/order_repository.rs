//! Port for order persistence and order listings.

use async_trait::async_trait;

use crate::domain::{Order, OrderDateInterval, OrderId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by order repository adapters.
    pub enum OrderRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "order repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "order repository query failed: {message}",
    }
}

/// Port for writing orders and reading them back by id or date.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store an order. An existing row with the same id is left untouched.
    async fn insert(&self, order: &Order) -> Result<(), OrderRepositoryError>;

    /// Find an order by id.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError>;

    /// Orders dated within the interval, oldest first, ties broken by id.
    async fn list_in_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Order>, OrderRepositoryError>;

    /// Every order, highest id first.
    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError>;
}
