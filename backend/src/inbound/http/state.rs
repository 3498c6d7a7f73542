//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{OrdersQuery, PurchaseFileCommand, PurchasesQuery, UserQuery};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UserQuery>,
    pub orders: Arc<dyn OrdersQuery>,
    pub purchases: Arc<dyn PurchasesQuery>,
    pub purchase_files: Arc<dyn PurchaseFileCommand>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserQuery>,
    pub orders: Arc<dyn OrdersQuery>,
    pub purchases: Arc<dyn PurchasesQuery>,
    pub purchase_files: Arc<dyn PurchaseFileCommand>,
    /// Source of "today" when `/orders` receives a start date without an end.
    pub clock: Arc<dyn Clock>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle using the system clock.
    pub fn new(ports: HttpStatePorts) -> Self {
        Self::with_clock(ports, Arc::new(DefaultClock))
    }

    /// Construct state from a ports bundle and an explicit clock.
    pub fn with_clock(ports: HttpStatePorts, clock: Arc<dyn Clock>) -> Self {
        let HttpStatePorts {
            users,
            orders,
            purchases,
            purchase_files,
        } = ports;
        Self {
            users,
            orders,
            purchases,
            purchase_files,
            clock,
        }
    }
}
