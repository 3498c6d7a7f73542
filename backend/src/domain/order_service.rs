//! Order and purchase domain services.
//!
//! This module implements the [`OrdersQuery`] and [`PurchasesQuery`] driving
//! ports. Purchases are assembled on every call from the stored order, its
//! owner, and its lines; any failure along the way fails the whole request.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    OrderProductRepository, OrderProductRepositoryError, OrderRepository, OrderRepositoryError,
    OrdersQuery, PurchasesQuery, UserRepository,
};
use crate::domain::user_service::map_user_repository_error;
use crate::domain::{Error, Order, OrderDateInterval, OrderId, Purchase};

/// Order service implementing the order and purchase driving ports.
#[derive(Clone)]
pub struct OrderService<O, L, U> {
    orders: Arc<O>,
    order_products: Arc<L>,
    users: Arc<U>,
}

impl<O, L, U> OrderService<O, L, U> {
    /// Create a new service with the given repositories.
    pub fn new(orders: Arc<O>, order_products: Arc<L>, users: Arc<U>) -> Self {
        Self {
            orders,
            order_products,
            users,
        }
    }
}

impl<O, L, U> OrderService<O, L, U>
where
    O: OrderRepository,
    L: OrderProductRepository,
    U: UserRepository,
{
    fn map_order_error(error: OrderRepositoryError) -> Error {
        match error {
            OrderRepositoryError::Connection { message } => {
                Error::internal(format!("order repository unavailable: {message}"))
            }
            OrderRepositoryError::Query { message } => {
                Error::internal(format!("order repository error: {message}"))
            }
        }
    }

    fn map_order_product_error(error: OrderProductRepositoryError) -> Error {
        match error {
            OrderProductRepositoryError::Connection { message } => {
                Error::internal(format!("order product repository unavailable: {message}"))
            }
            OrderProductRepositoryError::Query { message } => {
                Error::internal(format!("order product repository error: {message}"))
            }
        }
    }

    fn non_empty(orders: Vec<Order>) -> Result<Vec<Order>, Error> {
        if orders.is_empty() {
            Err(Error::no_orders())
        } else {
            Ok(orders)
        }
    }

    async fn assemble(&self, order: &Order) -> Result<Purchase, Error> {
        let user = self
            .users
            .find_by_id(order.user_id())
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(Error::user_not_found)?;
        let lines = self
            .order_products
            .list_by_order(order.id())
            .await
            .map_err(Self::map_order_product_error)?;
        Ok(Purchase::assemble(&user, order, lines))
    }

    async fn assemble_all(&self, orders: &[Order]) -> Result<Vec<Purchase>, Error> {
        let mut purchases = Vec::with_capacity(orders.len());
        for order in orders {
            purchases.push(self.assemble(order).await?);
        }
        Ok(purchases)
    }
}

#[async_trait]
impl<O, L, U> OrdersQuery for OrderService<O, L, U>
where
    O: OrderRepository,
    L: OrderProductRepository,
    U: UserRepository,
{
    async fn get_order_by_id(&self, id: OrderId) -> Result<Order, Error> {
        let order = self
            .orders
            .find_by_id(id)
            .await
            .map_err(Self::map_order_error)?;
        match order {
            Some(order) if order.id().value() != 0 => Ok(order),
            _ => Err(Error::order_not_found()),
        }
    }

    async fn get_orders_in_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Order>, Error> {
        let orders = self
            .orders
            .list_in_interval(interval)
            .await
            .map_err(Self::map_order_error)?;
        Self::non_empty(orders)
    }

    async fn get_all_orders(&self) -> Result<Vec<Order>, Error> {
        let orders = self
            .orders
            .list_all()
            .await
            .map_err(Self::map_order_error)?;
        Self::non_empty(orders)
    }
}

#[async_trait]
impl<O, L, U> PurchasesQuery for OrderService<O, L, U>
where
    O: OrderRepository,
    L: OrderProductRepository,
    U: UserRepository,
{
    async fn get_all_orders_products(&self) -> Result<Vec<Purchase>, Error> {
        let orders = self.get_all_orders().await?;
        self.assemble_all(&orders).await
    }

    async fn get_orders_products_by_order_id(&self, id: OrderId) -> Result<Vec<Purchase>, Error> {
        let order = self.get_order_by_id(id).await?;
        Ok(vec![self.assemble(&order).await?])
    }

    async fn get_orders_products_by_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Purchase>, Error> {
        let orders = self.get_orders_in_interval(interval).await?;
        self.assemble_all(&orders).await
    }
}

#[cfg(test)]
#[path = "order_service_tests.rs"]
mod tests;
