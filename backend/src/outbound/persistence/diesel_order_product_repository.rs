//! PostgreSQL-backed `OrderProductRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OrderProductRepository, OrderProductRepositoryError};
use crate::domain::{OrderId, OrderProduct, ProductId};

use super::diesel_error_mapping::{map_diesel_error, map_id_error, map_pool_error};
use super::models::{IdRangeError, NewOrderProductRow, OrderProductRow, from_column, to_column};
use super::pool::{DbPool, PoolError};
use super::schema::order_products;

/// Diesel-backed implementation of the order product repository port.
#[derive(Clone)]
pub struct DieselOrderProductRepository {
    pool: DbPool,
}

impl DieselOrderProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> OrderProductRepositoryError {
    map_pool_error(error, OrderProductRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> OrderProductRepositoryError {
    map_diesel_error(
        error,
        OrderProductRepositoryError::query,
        OrderProductRepositoryError::connection,
    )
}

fn id_error(error: IdRangeError) -> OrderProductRepositoryError {
    map_id_error(error, OrderProductRepositoryError::query)
}

fn row_to_line(row: OrderProductRow) -> Result<OrderProduct, OrderProductRepositoryError> {
    let order_id = from_column("order_products.order_id", row.order_id).map_err(id_error)?;
    let product_id = from_column("order_products.product_id", row.product_id).map_err(id_error)?;
    Ok(OrderProduct::new(
        OrderId::new(order_id),
        ProductId::new(product_id),
        row.value,
    ))
}

#[async_trait]
impl OrderProductRepository for DieselOrderProductRepository {
    async fn insert(&self, line: &OrderProduct) -> Result<(), OrderProductRepositoryError> {
        let row = NewOrderProductRow {
            order_id: to_column("order_products.order_id", line.order_id().value())
                .map_err(id_error)?,
            product_id: to_column("order_products.product_id", line.product_id().value())
                .map_err(id_error)?,
            value: line.value(),
        };
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::insert_into(order_products::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn list_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderProduct>, OrderProductRepositoryError> {
        let order_id = to_column("order_products.order_id", order_id.value()).map_err(id_error)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let rows: Vec<OrderProductRow> = order_products::table
            .filter(order_products::order_id.eq(order_id))
            .order(order_products::id.asc())
            .select(OrderProductRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter().map(row_to_line).collect()
    }
}
