//! PostgreSQL-backed `ProductRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::Product;
use crate::domain::ports::{ProductRepository, ProductRepositoryError};

use super::diesel_error_mapping::{map_diesel_error, map_id_error, map_pool_error};
use super::models::{NewProductRow, to_column};
use super::pool::DbPool;
use super::schema::products;

/// Diesel-backed implementation of the product repository port.
#[derive(Clone)]
pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for DieselProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), ProductRepositoryError> {
        let row = NewProductRow {
            id: to_column("products.id", product.id().value())
                .map_err(|err| map_id_error(err, ProductRepositoryError::query))?,
        };
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, ProductRepositoryError::connection))?;

        diesel::insert_into(products::table)
            .values(&row)
            .on_conflict(products::id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                map_diesel_error(
                    err,
                    ProductRepositoryError::query,
                    ProductRepositoryError::connection,
                )
            })
    }
}
