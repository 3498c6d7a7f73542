//! Fixed-width purchase file records.
//!
//! Each line of an uploaded purchase file describes one priced product on one
//! order:
//!
//! ```text
//! bytes   field
//! 0..10   user id (numeric, left-padded)
//! 10..55  user name
//! 55..65  order id
//! 65..75  product id
//! 75..87  product value (decimal)
//! 87..95  order date (YYYYMMDD)
//! ```
//!
//! Parsing is lenient. A field that cannot be parsed is logged and replaced by
//! its zero value, so every line yields a record.

use std::ops::Range;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use super::{Order, OrderId, OrderProduct, Product, ProductId, User, UserId};

const USER_ID: Range<usize> = 0..10;
const USER_NAME: Range<usize> = 10..55;
const ORDER_ID: Range<usize> = 55..65;
const PRODUCT_ID: Range<usize> = 65..75;
const PRODUCT_VALUE: Range<usize> = 75..87;
const ORDER_DATE: Range<usize> = 87..95;

/// One parsed line of a purchase file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseRecord {
    pub user_id: UserId,
    pub user_name: String,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub product_value: Decimal,
    pub order_date: NaiveDate,
}

impl PurchaseRecord {
    /// Parse one fixed-width line. Never fails.
    ///
    /// Lines shorter than the layout are read up to their end; fields past the
    /// end are empty and take their zero value.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use purchases::domain::PurchaseRecord;
    ///
    /// let line = "0000000070                              Palmer Prosacco00000007530000000003     1836.7420210308";
    /// let record = PurchaseRecord::parse_line(line);
    /// assert_eq!(record.user_id.value(), 70);
    /// assert_eq!(record.user_name, "Palmer Prosacco");
    /// assert_eq!(record.order_date, NaiveDate::from_ymd_opt(2021, 3, 8).unwrap());
    /// ```
    #[must_use]
    pub fn parse_line(line: &str) -> Self {
        let user_id = parse_id(column(line, USER_ID), "user id");
        let user_name = column(line, USER_NAME).to_owned();
        let order_id = parse_id(column(line, ORDER_ID), "order id");
        let product_id = parse_id(column(line, PRODUCT_ID), "product id");
        let product_value = parse_value(column(line, PRODUCT_VALUE));
        let order_date = parse_date(column(line, ORDER_DATE));

        Self {
            user_id: UserId::new(user_id),
            user_name,
            order_id: OrderId::new(order_id),
            product_id: ProductId::new(product_id),
            product_value,
            order_date,
        }
    }

    #[must_use]
    pub fn user(&self) -> User {
        User::new(self.user_id, self.user_name.clone())
    }

    #[must_use]
    pub fn product(&self) -> Product {
        Product::new(self.product_id)
    }

    #[must_use]
    pub fn order(&self) -> Order {
        Order::new(self.order_id, self.user_id, self.order_date)
    }

    #[must_use]
    pub fn order_product(&self) -> OrderProduct {
        OrderProduct::new(self.order_id, self.product_id, self.product_value)
    }
}

/// Slice a column clamped to the line, trimmed of padding.
///
/// A boundary that splits a multi-byte character yields an empty field.
fn column(line: &str, range: Range<usize>) -> &str {
    let end = range.end.min(line.len());
    if range.start >= end {
        return "";
    }
    line.get(range.start..end).map_or("", str::trim)
}

fn parse_id(field: &str, name: &'static str) -> u64 {
    match field.parse::<u64>() {
        Ok(value) => value,
        Err(error) => {
            warn!(field = name, value = field, %error, "failed to parse identifier");
            0
        }
    }
}

fn parse_value(field: &str) -> Decimal {
    match Decimal::from_str(field) {
        Ok(value) => value,
        Err(error) => {
            warn!(value = field, %error, "failed to parse product value");
            Decimal::ZERO
        }
    }
}

fn parse_date(field: &str) -> NaiveDate {
    let rebuilt = match (field.get(0..4), field.get(4..6), field.get(6..8)) {
        (Some(year), Some(month), Some(day)) if field.len() == 8 => {
            format!("{year}-{month}-{day}")
        }
        _ => field.to_owned(),
    };
    match NaiveDate::parse_from_str(&rebuilt, "%Y-%m-%d") {
        Ok(date) => date,
        Err(error) => {
            warn!(value = %rebuilt, %error, "failed to parse order date");
            NaiveDate::default()
        }
    }
}
