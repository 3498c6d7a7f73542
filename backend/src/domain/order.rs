//! Orders, their priced lines, and date-interval filters.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Error, ProductId, UserId};

/// Externally supplied order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct OrderId(u64);

impl OrderId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order placed by a user on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    date: NaiveDate,
}

impl Order {
    #[must_use]
    pub const fn new(id: OrderId, user_id: UserId, date: NaiveDate) -> Self {
        Self { id, user_id, date }
    }

    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A priced line linking an order to a product.
///
/// The same product may appear on an order more than once; every line is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderProduct {
    order_id: OrderId,
    product_id: ProductId,
    value: Decimal,
}

impl OrderProduct {
    #[must_use]
    pub const fn new(order_id: OrderId, product_id: ProductId, value: Decimal) -> Self {
        Self {
            order_id,
            product_id,
            value,
        }
    }

    #[must_use]
    pub const fn order_id(&self) -> OrderId {
        self.order_id
    }

    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }
}

/// Inclusive calendar-date interval used to filter orders.
///
/// ## Invariants
/// - `end` is never before `start`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use purchases::domain::OrderDateInterval;
///
/// let start = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
/// assert!(OrderDateInterval::new(start, end).is_ok());
/// assert!(OrderDateInterval::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderDateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl OrderDateInterval {
    /// Build an interval, rejecting one whose end precedes its start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if end < start {
            return Err(Error::invalid_date_interval());
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within the interval, bounds included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
