//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Query`, `*Command`) are implemented by domain services and consumed
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod order_product_repository;
mod order_repository;
mod orders_query;
mod product_repository;
mod purchase_file_command;
mod purchases_query;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use order_product_repository::MockOrderProductRepository;
pub use order_product_repository::{OrderProductRepository, OrderProductRepositoryError};
#[cfg(test)]
pub use order_repository::MockOrderRepository;
pub use order_repository::{OrderRepository, OrderRepositoryError};
#[cfg(test)]
pub use orders_query::MockOrdersQuery;
pub use orders_query::OrdersQuery;
#[cfg(test)]
pub use product_repository::MockProductRepository;
pub use product_repository::{ProductRepository, ProductRepositoryError};
#[cfg(test)]
pub use purchase_file_command::MockPurchaseFileCommand;
pub use purchase_file_command::{IngestionReport, InsertOutcome, LineOutcome, PurchaseFileCommand};
#[cfg(test)]
pub use purchases_query::MockPurchasesQuery;
pub use purchases_query::PurchasesQuery;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
