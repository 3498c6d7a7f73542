//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_id_error, map_pool_error};
use super::models::{IdRangeError, NewUserRow, UserRow, from_column, to_column};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserRepositoryError {
    map_pool_error(error, UserRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> UserRepositoryError {
    map_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

fn id_error(error: IdRangeError) -> UserRepositoryError {
    map_id_error(error, UserRepositoryError::query)
}

fn row_to_user(row: UserRow) -> Result<User, UserRepositoryError> {
    let id = from_column("users.id", row.id).map_err(id_error)?;
    Ok(User::new(UserId::new(id), row.name))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let row = NewUserRow {
            id: to_column("users.id", user.id().value()).map_err(id_error)?,
            name: user.name(),
        };
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        diesel::insert_into(users::table)
            .values(&row)
            .on_conflict(users::id)
            .do_nothing()
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let id = to_column("users.id", id.value()).map_err(id_error)?;
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let row = users::table
            .filter(users::id.eq(id))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;

        row.map(row_to_user).transpose()
    }
}
