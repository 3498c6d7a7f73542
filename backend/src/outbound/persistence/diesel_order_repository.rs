//! PostgreSQL-backed `OrderRepository` implementation using Diesel ORM.
//!
//! Listings are ordered in SQL: interval queries oldest first (id breaks
//! ties), full listings by descending id.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OrderRepository, OrderRepositoryError};
use crate::domain::{Order, OrderDateInterval, OrderId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_id_error, map_pool_error};
use super::models::{IdRangeError, OrderRow, from_column, to_column};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

/// Diesel-backed implementation of the order repository port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> OrderRepositoryError {
    map_pool_error(error, OrderRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> OrderRepositoryError {
    map_diesel_error(
        error,
        OrderRepositoryError::query,
        OrderRepositoryError::connection,
    )
}

fn id_error(error: IdRangeError) -> OrderRepositoryError {
    map_id_error(error, OrderRepositoryError::query)
}

fn order_to_row(order: &Order) -> Result<OrderRow, OrderRepositoryError> {
    Ok(OrderRow {
        id: to_column("orders.id", order.id().value()).map_err(id_error)?,
        user_id: to_column("orders.user_id", order.user_id().value()).map_err(id_error)?,
        date: order.date(),
    })
}

fn row_to_order(row: OrderRow) -> Result<Order, OrderRepositoryError> {
    let id = from_column("orders.id", row.id).map_err(id_error)?;
    let user_id = from_column("orders.user_id", row.user_id).map_err(id_error)?;
    Ok(Order::new(OrderId::new(id), UserId::new(user_id), row.date))
}

fn rows_to_orders(rows: Vec<OrderRow>) -> Result<Vec<Order>, OrderRepositoryError> {
    rows.into_iter().map(row_to_order).collect()
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn insert(&self, order: &Order) -> Result<(), OrderRepositoryError> {
        let row = order_to_row(order)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::insert_into(orders::table)
            .values(&row)
            .on_conflict(orders::id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        let id = to_column("orders.id", id.value()).map_err(id_error)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first::<OrderRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_order).transpose()
    }

    async fn list_in_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<OrderRow> = orders::table
            .filter(orders::date.ge(interval.start()))
            .filter(orders::date.le(interval.end()))
            .order((orders::date.asc(), orders::id.asc()))
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_orders(rows)
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<OrderRow> = orders::table
            .order(orders::id.desc())
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows_to_orders(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn order_round_trips_through_row() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 8).expect("date");
        let order = Order::new(OrderId::new(753), UserId::new(70), date);

        let row = order_to_row(&order).expect("row");

        assert_eq!((row.id, row.user_id, row.date), (753, 70, date));
        assert_eq!(row_to_order(row).expect("order"), order);
    }

    #[rstest]
    fn oversized_order_id_is_rejected_before_querying() {
        let order = Order::new(OrderId::new(u64::MAX), UserId::new(1), NaiveDate::default());
        let error = order_to_row(&order).expect_err("out of range");
        assert!(error.to_string().contains("orders.id"));
    }
}
