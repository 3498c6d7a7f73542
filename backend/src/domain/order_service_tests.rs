//! Tests for the order and purchase service.

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use rstest::{fixture, rstest};
use rust_decimal::Decimal;

use super::*;
use crate::domain::ports::{
    MockOrderProductRepository, MockOrderRepository, MockUserRepository, UserRepositoryError,
};
use crate::domain::{ErrorCode, OrderProduct, ProductId, User, UserId};

type Service = OrderService<MockOrderRepository, MockOrderProductRepository, MockUserRepository>;

fn make_service(
    orders: MockOrderRepository,
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) -> Service {
    OrderService::new(Arc::new(orders), Arc::new(lines), Arc::new(users))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn decimal(raw: &str) -> Decimal {
    Decimal::from_str(raw).expect("valid decimal")
}

fn order(id: u64, user_id: u64, day: NaiveDate) -> Order {
    Order::new(OrderId::new(id), UserId::new(user_id), day)
}

#[fixture]
fn users() -> MockUserRepository {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .returning(|id| Ok(Some(User::new(id, format!("user {id}")))));
    users
}

#[fixture]
fn lines() -> MockOrderProductRepository {
    let mut lines = MockOrderProductRepository::new();
    lines.expect_list_by_order().returning(|order_id| {
        Ok(vec![
            OrderProduct::new(order_id, ProductId::new(1), decimal("10.25")),
            OrderProduct::new(order_id, ProductId::new(2), decimal("0.75")),
        ])
    });
    lines
}

#[rstest]
#[tokio::test]
async fn get_order_by_id_returns_stored_order(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(Order::new(id, UserId::new(5), date(2021, 1, 2)))));

    let found = make_service(orders, lines, users)
        .get_order_by_id(OrderId::new(9))
        .await
        .expect("order");

    assert_eq!(found, order(9, 5, date(2021, 1, 2)));
}

#[rstest]
#[case(None)]
#[case(Some(order(0, 0, NaiveDate::default())))]
#[tokio::test]
async fn get_order_by_id_treats_missing_or_placeholder_as_not_found(
    #[case] stored: Option<Order>,
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(stored));

    let error = make_service(orders, lines, users)
        .get_order_by_id(OrderId::new(0))
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.detail_code(), Some("order_not_found"));
}

#[rstest]
#[tokio::test]
async fn empty_listings_report_no_orders(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders.expect_list_all().times(1).return_once(|| Ok(Vec::new()));
    orders
        .expect_list_in_interval()
        .times(1)
        .return_once(|_| Ok(Vec::new()));
    let service = make_service(orders, lines, users);
    let interval = OrderDateInterval::new(date(2021, 1, 1), date(2021, 2, 1)).expect("interval");

    let all = service.get_all_orders().await.expect_err("no orders");
    let ranged = service
        .get_orders_in_interval(&interval)
        .await
        .expect_err("no orders");

    assert_eq!(all.detail_code(), Some("no_orders"));
    assert_eq!(ranged.detail_code(), Some("no_orders"));
}

#[rstest]
#[tokio::test]
async fn interval_is_forwarded_to_repository(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let interval = OrderDateInterval::new(date(2021, 1, 1), date(2021, 2, 1)).expect("interval");
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_in_interval()
        .withf(move |requested| *requested == interval)
        .times(1)
        .return_once(|_| Ok(vec![order(2, 1, date(2021, 1, 5))]));

    let found = make_service(orders, lines, users)
        .get_orders_in_interval(&interval)
        .await
        .expect("orders");

    assert_eq!(found.len(), 1);
}

#[rstest]
#[tokio::test]
async fn purchases_follow_order_listing_and_sum_lines(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders.expect_list_all().times(1).return_once(|| {
        Ok(vec![
            order(30, 3, date(2021, 5, 1)),
            order(20, 2, date(2021, 4, 1)),
        ])
    });

    let purchases = make_service(orders, lines, users)
        .get_all_orders_products()
        .await
        .expect("purchases");

    let ids: Vec<u64> = purchases
        .iter()
        .map(|purchase| purchase.order.order_id.value())
        .collect();
    assert_eq!(ids, vec![30, 20]);
    assert_eq!(purchases[0].user_id, UserId::new(3));
    assert_eq!(purchases[0].name, "user 3");
    assert_eq!(purchases[0].order.total, decimal("11.00"));
    assert_eq!(purchases[1].order.products.len(), 2);
}

#[rstest]
#[tokio::test]
async fn purchase_by_order_id_returns_single_purchase(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|id| Ok(Some(Order::new(id, UserId::new(8), date(2021, 6, 1)))));

    let purchases = make_service(orders, lines, users)
        .get_orders_products_by_order_id(OrderId::new(77))
        .await
        .expect("purchase");

    assert_eq!(purchases.len(), 1);
    assert_eq!(purchases[0].order.order_id, OrderId::new(77));
    assert_eq!(purchases[0].order.date, date(2021, 6, 1));
}

#[rstest]
#[tokio::test]
async fn purchase_by_unknown_order_id_is_not_found(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(None));

    let error = make_service(orders, lines, users)
        .get_orders_products_by_order_id(OrderId::new(77))
        .await
        .expect_err("not found");

    assert_eq!(error.detail_code(), Some("order_not_found"));
}

#[rstest]
#[tokio::test]
async fn missing_user_fails_whole_aggregation(lines: MockOrderProductRepository) {
    let mut orders = MockOrderRepository::new();
    orders.expect_list_in_interval().times(1).return_once(|_| {
        Ok(vec![
            order(1, 1, date(2021, 1, 1)),
            order(2, 404, date(2021, 1, 2)),
        ])
    });
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().returning(|id| {
        if id.value() == 404 {
            Ok(None)
        } else {
            Ok(Some(User::new(id, "present")))
        }
    });
    let interval = OrderDateInterval::new(date(2021, 1, 1), date(2021, 1, 31)).expect("interval");

    let error = make_service(orders, lines, users)
        .get_orders_products_by_interval(&interval)
        .await
        .expect_err("aggregation fails");

    assert_eq!(error.detail_code(), Some("user_not_found"));
}

#[rstest]
#[tokio::test]
async fn line_lookup_failure_fails_whole_aggregation(users: MockUserRepository) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![order(1, 1, date(2021, 1, 1))]));
    let mut lines = MockOrderProductRepository::new();
    lines
        .expect_list_by_order()
        .times(1)
        .return_once(|_| Err(OrderProductRepositoryError::connection("refused")));

    let error = make_service(orders, lines, users)
        .get_all_orders_products()
        .await
        .expect_err("aggregation fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn user_lookup_query_error_is_internal(lines: MockOrderProductRepository) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![order(1, 1, date(2021, 1, 1))]));
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserRepositoryError::query("bad column")));

    let error = make_service(orders, lines, users)
        .get_all_orders_products()
        .await
        .expect_err("aggregation fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}

#[rstest]
#[tokio::test]
async fn order_repository_errors_are_mapped(
    lines: MockOrderProductRepository,
    users: MockUserRepository,
) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Err(OrderRepositoryError::connection("refused")));

    let error = make_service(orders, lines, users)
        .get_order_by_id(OrderId::new(1))
        .await
        .expect_err("mapped");

    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), "order repository unavailable: refused");
}
