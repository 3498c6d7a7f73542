//! In-memory repository doubles mirroring the Diesel adapters' contracts.
//!
//! Users, products and orders ignore inserts for an id that already exists;
//! order lines always append.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use purchases::domain::ports::{
    OrderProductRepository, OrderProductRepositoryError, OrderRepository, OrderRepositoryError,
    ProductRepository, ProductRepositoryError, UserRepository, UserRepositoryError,
};
use purchases::domain::{
    Order, OrderDateInterval, OrderId, OrderProduct, OrderService, Product, ProductId,
    PurchaseFileRepositories, PurchaseFileService, User, UserId, UserService,
};
use purchases::inbound::http::state::HttpStatePorts;

#[derive(Default)]
pub struct InMemoryUsers(Mutex<BTreeMap<UserId, User>>);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = self.0.lock().expect("users lock");
        users.entry(user.id()).or_insert_with(|| user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.0.lock().expect("users lock").get(&id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProducts(Mutex<BTreeMap<ProductId, Product>>);

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn insert(&self, product: &Product) -> Result<(), ProductRepositoryError> {
        let mut products = self.0.lock().expect("products lock");
        products.entry(product.id()).or_insert(*product);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryOrders(Mutex<BTreeMap<OrderId, Order>>);

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn insert(&self, order: &Order) -> Result<(), OrderRepositoryError> {
        let mut orders = self.0.lock().expect("orders lock");
        orders.entry(order.id()).or_insert_with(|| order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, OrderRepositoryError> {
        Ok(self.0.lock().expect("orders lock").get(&id).cloned())
    }

    async fn list_in_interval(
        &self,
        interval: &OrderDateInterval,
    ) -> Result<Vec<Order>, OrderRepositoryError> {
        let mut orders: Vec<Order> = self
            .0
            .lock()
            .expect("orders lock")
            .values()
            .filter(|order| interval.contains(order.date()))
            .cloned()
            .collect();
        orders.sort_by_key(|order| (order.date(), order.id()));
        Ok(orders)
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderRepositoryError> {
        Ok(self
            .0
            .lock()
            .expect("orders lock")
            .values()
            .rev()
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryOrderProducts(Mutex<Vec<OrderProduct>>);

#[async_trait]
impl OrderProductRepository for InMemoryOrderProducts {
    async fn insert(&self, line: &OrderProduct) -> Result<(), OrderProductRepositoryError> {
        self.0.lock().expect("lines lock").push(line.clone());
        Ok(())
    }

    async fn list_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderProduct>, OrderProductRepositoryError> {
        Ok(self
            .0
            .lock()
            .expect("lines lock")
            .iter()
            .filter(|line| line.order_id() == order_id)
            .cloned()
            .collect())
    }
}

/// Every HTTP port wired to real domain services over shared in-memory stores.
pub fn in_memory_ports() -> HttpStatePorts {
    let users = Arc::new(InMemoryUsers::default());
    let products = Arc::new(InMemoryProducts::default());
    let orders = Arc::new(InMemoryOrders::default());
    let order_products = Arc::new(InMemoryOrderProducts::default());

    let order_service = Arc::new(OrderService::new(
        orders.clone(),
        order_products.clone(),
        users.clone(),
    ));
    HttpStatePorts {
        users: Arc::new(UserService::new(users.clone())),
        orders: order_service.clone(),
        purchases: order_service,
        purchase_files: Arc::new(PurchaseFileService::new(PurchaseFileRepositories {
            users,
            products,
            orders,
            order_products,
        })),
    }
}
