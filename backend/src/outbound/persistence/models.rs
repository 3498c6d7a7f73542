//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Identifiers are `BIGINT` in the store and
//! `u64` in the domain; the conversions here reject values outside the
//! shared range instead of wrapping.

use chrono::NaiveDate;
use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::{order_products, orders, products, users};

/// Identifier outside the range representable on both sides of the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{column} {value} is outside the storable identifier range")]
pub(crate) struct IdRangeError {
    column: &'static str,
    value: i128,
}

/// Convert a domain identifier into its column value.
pub(crate) fn to_column(column: &'static str, value: u64) -> Result<i64, IdRangeError> {
    i64::try_from(value).map_err(|_| IdRangeError {
        column,
        value: i128::from(value),
    })
}

/// Convert a stored identifier back into a domain value.
pub(crate) fn from_column(column: &'static str, value: i64) -> Result<u64, IdRangeError> {
    u64::try_from(value).map_err(|_| IdRangeError {
        column,
        value: i128::from(value),
    })
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: i64,
    pub name: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = products)]
pub(crate) struct NewProductRow {
    pub id: i64,
}

/// Orders have no store-assigned columns, so one struct reads and writes.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = order_products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderProductRow {
    pub order_id: i64,
    pub product_id: i64,
    pub value: Decimal,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = order_products)]
pub(crate) struct NewOrderProductRow {
    pub order_id: i64,
    pub product_id: i64,
    pub value: Decimal,
}
