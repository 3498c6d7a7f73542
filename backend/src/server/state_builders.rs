//! Builders for HTTP state ports.

use std::sync::Arc;

use actix_web::web;

use purchases::domain::{OrderService, PurchaseFileRepositories, PurchaseFileService, UserService};
use purchases::inbound::http::state::{HttpState, HttpStatePorts};
use purchases::outbound::persistence::{
    DbPool, DieselOrderProductRepository, DieselOrderRepository, DieselProductRepository,
    DieselUserRepository,
};

use super::ServerConfig;

/// Wire the domain services over Diesel repositories sharing one pool.
fn build_diesel_ports(pool: &DbPool) -> HttpStatePorts {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let products = Arc::new(DieselProductRepository::new(pool.clone()));
    let orders = Arc::new(DieselOrderRepository::new(pool.clone()));
    let order_products = Arc::new(DieselOrderProductRepository::new(pool.clone()));

    let order_service = Arc::new(OrderService::new(
        orders.clone(),
        order_products.clone(),
        users.clone(),
    ));
    let purchase_files = PurchaseFileService::new(PurchaseFileRepositories {
        users: users.clone(),
        products,
        orders,
        order_products,
    });

    HttpStatePorts {
        users: Arc::new(UserService::new(users)),
        orders: order_service.clone(),
        purchases: order_service,
        purchase_files: Arc::new(purchase_files),
    }
}

/// Build the shared HTTP state over the configured pool.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(build_diesel_ports(&config.db_pool)))
}
