//! Purchase aggregation: one order joined with its user and priced lines.
//!
//! Purchases are derived on every read and never persisted, so a total always
//! reflects the order lines stored at query time.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{Order, OrderId, OrderProduct, ProductId, User, UserId};

/// A priced product line inside a purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseProduct {
    pub product_id: ProductId,
    pub value: Decimal,
}

/// The order part of a purchase, with its computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrder {
    pub order_id: OrderId,
    pub total: Decimal,
    pub date: NaiveDate,
    pub products: Vec<PurchaseProduct>,
}

/// Denormalised view of a user and one of their orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub user_id: UserId,
    pub name: String,
    pub order: PurchaseOrder,
}

impl Purchase {
    /// Join an order with its owner and lines, summing the line values.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use purchases::domain::{
    ///     Order, OrderId, OrderProduct, ProductId, Purchase, User, UserId,
    /// };
    ///
    /// let date = NaiveDate::from_ymd_opt(2021, 12, 1).unwrap();
    /// let user = User::new(UserId::new(1), "Ana");
    /// let order = Order::new(OrderId::new(10), user.id(), date);
    /// let lines = vec![
    ///     OrderProduct::new(order.id(), ProductId::new(3), Decimal::new(1050, 2)),
    ///     OrderProduct::new(order.id(), ProductId::new(4), Decimal::new(250, 2)),
    /// ];
    /// let purchase = Purchase::assemble(&user, &order, lines);
    /// assert_eq!(purchase.order.total, Decimal::new(1300, 2));
    /// ```
    #[must_use]
    pub fn assemble(user: &User, order: &Order, lines: Vec<OrderProduct>) -> Self {
        let total = lines.iter().map(OrderProduct::value).sum();
        let products = lines
            .into_iter()
            .map(|line| PurchaseProduct {
                product_id: line.product_id(),
                value: line.value(),
            })
            .collect();
        Self {
            user_id: user.id(),
            name: user.name().to_owned(),
            order: PurchaseOrder {
                order_id: order.id(),
                total,
                date: order.date(),
                products,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    fn decimal(raw: &str) -> Decimal {
        Decimal::from_str(raw).expect("valid decimal")
    }

    #[rstest]
    fn total_is_exact_sum_of_line_values() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 8).expect("valid date");
        let user = User::new(UserId::new(70), "Palmer Prosacco");
        let order = Order::new(OrderId::new(753), user.id(), date);
        let lines = vec![
            OrderProduct::new(order.id(), ProductId::new(3), decimal("1836.74")),
            OrderProduct::new(order.id(), ProductId::new(4), decimal("0.10")),
            OrderProduct::new(order.id(), ProductId::new(3), decimal("0.20")),
        ];

        let purchase = Purchase::assemble(&user, &order, lines);

        assert_eq!(purchase.user_id, UserId::new(70));
        assert_eq!(purchase.name, "Palmer Prosacco");
        assert_eq!(purchase.order.order_id, OrderId::new(753));
        assert_eq!(purchase.order.date, date);
        assert_eq!(purchase.order.total, decimal("1837.04"));
        assert_eq!(purchase.order.products.len(), 3);
        assert_eq!(purchase.order.products[1].product_id, ProductId::new(4));
    }

    #[rstest]
    #[case(&["9.99", "5.49"], "15.48")]
    #[case(&["0.10", "0.20"], "0.30")]
    fn totals_do_not_drift_like_binary_floats(#[case] values: &[&str], #[case] expected: &str) {
        let date = NaiveDate::from_ymd_opt(2021, 3, 8).expect("valid date");
        let user = User::new(UserId::new(1), "Ana");
        let order = Order::new(OrderId::new(2), user.id(), date);
        let lines = values
            .iter()
            .map(|value| OrderProduct::new(order.id(), ProductId::new(1), decimal(value)))
            .collect();

        let purchase = Purchase::assemble(&user, &order, lines);

        assert_eq!(purchase.order.total, decimal(expected));
    }

    #[rstest]
    fn order_without_lines_totals_zero() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 8).expect("valid date");
        let user = User::new(UserId::new(1), "Ana");
        let order = Order::new(OrderId::new(2), user.id(), date);

        let purchase = Purchase::assemble(&user, &order, Vec::new());

        assert_eq!(purchase.order.total, Decimal::ZERO);
        assert!(purchase.order.products.is_empty());
    }
}
