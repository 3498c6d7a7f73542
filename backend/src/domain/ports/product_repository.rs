//! Port abstraction for product persistence adapters.

use async_trait::async_trait;

use crate::domain::Product;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "product repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "product repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a product. An existing row with the same id is left untouched.
    async fn insert(&self, product: &Product) -> Result<(), ProductRepositoryError>;
}
