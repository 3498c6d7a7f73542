//! Order and purchase API handlers.
//!
//! ```text
//! GET /order/753
//! GET /orders?id=753
//! GET /orders?startDate=2021-01-01&endDate=2021-12-31
//! GET /orders
//! ```

use actix_web::{get, web};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, Order, OrderDateInterval, OrderId, Purchase, PurchaseProduct};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_date, parse_id};

/// Order response body for `GET /order/{id}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct OrderResponse {
    pub id: u64,
    pub user_id: u64,
    #[schema(example = "2021-03-08")]
    pub date: NaiveDate,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id().value(),
            user_id: order.user_id().value(),
            date: order.date(),
        }
    }
}

/// A priced product line of a purchase.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct PurchaseProductResponse {
    pub product_id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1836.74)]
    pub value: Decimal,
}

impl From<PurchaseProduct> for PurchaseProductResponse {
    fn from(product: PurchaseProduct) -> Self {
        Self {
            product_id: product.product_id.value(),
            value: product.value,
        }
    }
}

/// An order inside a purchase, with the sum of its lines.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct PurchaseOrderResponse {
    pub order_id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1836.74)]
    pub total: Decimal,
    #[schema(example = "2021-03-08")]
    pub date: NaiveDate,
    pub products: Vec<PurchaseProductResponse>,
}

/// Purchase response: one user with one of their orders.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, utoipa::ToSchema)]
pub struct PurchaseResponse {
    pub user_id: u64,
    pub name: String,
    pub orders: Vec<PurchaseOrderResponse>,
}

impl From<Purchase> for PurchaseResponse {
    fn from(purchase: Purchase) -> Self {
        let Purchase {
            user_id,
            name,
            order,
        } = purchase;
        Self {
            user_id: user_id.value(),
            name,
            orders: vec![PurchaseOrderResponse {
                order_id: order.order_id.value(),
                total: order.total,
                date: order.date,
                products: order
                    .products
                    .into_iter()
                    .map(PurchaseProductResponse::from)
                    .collect(),
            }],
        }
    }
}

/// Query parameters accepted by `GET /orders`.
///
/// Empty values count as absent.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrdersParams {
    /// Order identifier; takes precedence over the date interval.
    pub id: Option<String>,
    /// First day of the interval, `YYYY-MM-DD`.
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    /// Last day of the interval, `YYYY-MM-DD`; defaults to today (UTC).
    /// Ignored without `startDate`.
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|raw| !raw.trim().is_empty())
}

/// Which purchases a `GET /orders` request selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrdersSelection {
    ById(OrderId),
    Interval(OrderDateInterval),
    All,
}

impl OrdersSelection {
    fn from_params(params: OrdersParams, today: NaiveDate) -> Result<Self, Error> {
        if let Some(raw) = present(params.id) {
            let id = parse_id(&raw, FieldName::new("id"))?;
            return Ok(Self::ById(OrderId::new(id)));
        }
        let Some(raw_start) = present(params.start_date) else {
            return Ok(Self::All);
        };
        let start = parse_date(&raw_start, FieldName::new("startDate"))?;
        let end = match present(params.end_date) {
            Some(raw_end) => parse_date(&raw_end, FieldName::new("endDate"))?,
            None => today,
        };
        Ok(Self::Interval(OrderDateInterval::new(start, end)?))
    }
}

/// Fetch an order without its lines.
#[utoipa::path(
    get,
    path = "/order/{id}",
    params(("id" = u64, Path, description = "Order identifier")),
    responses(
        (status = 200, description = "Order", body = OrderResponse),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "Order does not exist", body = ErrorSchema),
        (status = 500, description = "Lookup failed", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "getOrder"
)]
#[get("/order/{id}")]
pub async fn get_order(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<OrderResponse>> {
    let id = parse_id(&path.into_inner(), FieldName::new("id"))?;
    let order = state.orders.get_order_by_id(OrderId::new(id)).await?;
    Ok(web::Json(OrderResponse::from(order)))
}

/// List purchases by order id, by date interval, or all of them.
#[utoipa::path(
    get,
    path = "/orders",
    params(OrdersParams),
    responses(
        (status = 200, description = "Purchases", body = [PurchaseResponse]),
        (status = 400, description = "Malformed parameters or end date before start date", body = ErrorSchema),
        (status = 404, description = "No matching orders", body = ErrorSchema),
        (status = 500, description = "Aggregation failed", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["orders"],
    operation_id = "listOrders"
)]
#[get("/orders")]
pub async fn list_orders(
    state: web::Data<HttpState>,
    query: web::Query<OrdersParams>,
) -> ApiResult<web::Json<Vec<PurchaseResponse>>> {
    let today = state.clock.utc().date_naive();
    let purchases = match OrdersSelection::from_params(query.into_inner(), today)? {
        OrdersSelection::ById(id) => state.purchases.get_orders_products_by_order_id(id).await?,
        OrdersSelection::Interval(interval) => {
            state
                .purchases
                .get_orders_products_by_interval(&interval)
                .await?
        }
        OrdersSelection::All => state.purchases.get_all_orders_products().await?,
    };
    Ok(web::Json(
        purchases.into_iter().map(PurchaseResponse::from).collect(),
    ))
}

#[cfg(test)]
#[path = "orders_tests.rs"]
mod tests;
