//! Shared Diesel and pool error mapping for the purchase repositories.
//!
//! Database messages are kept in the mapped error because ingestion reports
//! surface them per failed insert.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::models::IdRangeError;
use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map Diesel errors into query/connection constructors.
pub(crate) fn map_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            connection(format!("database connection closed: {}", info.message()))
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            query(info.message().to_owned())
        }
        DieselError::NotFound => query("record not found".to_owned()),
        other => {
            debug!(error = %other, "diesel operation failed");
            query(other.to_string())
        }
    }
}

/// Map an identifier conversion failure into a query error.
pub(crate) fn map_id_error<E, Q>(error: IdRangeError, query: Q) -> E
where
    Q: FnOnce(String) -> E,
{
    query(error.to_string())
}
