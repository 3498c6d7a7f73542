//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed purchase entities and the use-cases built
//! on them. Nothing here depends on HTTP or Diesel; adapters reach the domain
//! through the traits in [`ports`].
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `User`, `Product`, `Order`, `OrderProduct`: persisted entities.
//! - `Purchase`: per-request aggregation of an order with its user and lines.
//! - `PurchaseRecord`: one parsed line of a fixed-width purchase file.
//! - `UserService`, `OrderService`, `PurchaseFileService`: driving port
//!   implementations.

pub mod error;
pub mod order;
mod order_service;
pub mod ports;
pub mod product;
pub mod purchase;
pub mod purchase_file;
mod purchase_file_service;
pub mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::order::{Order, OrderDateInterval, OrderId, OrderProduct};
pub use self::order_service::OrderService;
pub use self::product::{Product, ProductId};
pub use self::purchase::{Purchase, PurchaseOrder, PurchaseProduct};
pub use self::purchase_file::PurchaseRecord;
pub use self::purchase_file_service::{PurchaseFileRepositories, PurchaseFileService};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId};
pub use self::user_service::UserService;
