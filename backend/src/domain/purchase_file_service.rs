//! Purchase file ingestion service.
//!
//! Each line is parsed with [`PurchaseRecord::parse_line`] and split into
//! four independent inserts: user, product, order, and order line. A failed
//! insert is logged and recorded in the [`IngestionReport`]; it never stops
//! the remaining inserts of the line or later lines.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    IngestionReport, InsertOutcome, LineOutcome, OrderProductRepository, OrderRepository,
    ProductRepository, PurchaseFileCommand, UserRepository,
};
use crate::domain::{Error, PurchaseRecord};

/// Repositories written by the ingestion service.
pub struct PurchaseFileRepositories<U, P, O, L> {
    pub users: Arc<U>,
    pub products: Arc<P>,
    pub orders: Arc<O>,
    pub order_products: Arc<L>,
}

/// Ingestion service implementing [`PurchaseFileCommand`].
pub struct PurchaseFileService<U, P, O, L> {
    users: Arc<U>,
    products: Arc<P>,
    orders: Arc<O>,
    order_products: Arc<L>,
}

impl<U, P, O, L> PurchaseFileService<U, P, O, L> {
    pub fn new(repositories: PurchaseFileRepositories<U, P, O, L>) -> Self {
        let PurchaseFileRepositories {
            users,
            products,
            orders,
            order_products,
        } = repositories;
        Self {
            users,
            products,
            orders,
            order_products,
        }
    }
}

fn outcome<E: std::fmt::Display>(
    result: Result<(), E>,
    entity: &'static str,
    line_number: usize,
) -> InsertOutcome {
    match result {
        Ok(()) => InsertOutcome::Stored,
        Err(error) => {
            warn!(entity, line_number, %error, "failed to store purchase file entity");
            InsertOutcome::Failed {
                reason: error.to_string(),
            }
        }
    }
}

impl<U, P, O, L> PurchaseFileService<U, P, O, L>
where
    U: UserRepository,
    P: ProductRepository,
    O: OrderRepository,
    L: OrderProductRepository,
{
    async fn store_record(&self, line_number: usize, record: &PurchaseRecord) -> LineOutcome {
        let user = outcome(self.users.insert(&record.user()).await, "user", line_number);
        let product = outcome(
            self.products.insert(&record.product()).await,
            "product",
            line_number,
        );
        let order = outcome(
            self.orders.insert(&record.order()).await,
            "order",
            line_number,
        );
        let order_product = outcome(
            self.order_products.insert(&record.order_product()).await,
            "order_product",
            line_number,
        );
        LineOutcome {
            line_number,
            user,
            product,
            order,
            order_product,
        }
    }
}

#[async_trait]
impl<U, P, O, L> PurchaseFileCommand for PurchaseFileService<U, P, O, L>
where
    U: UserRepository,
    P: ProductRepository,
    O: OrderRepository,
    L: OrderProductRepository,
{
    async fn load_purchase_file(&self, contents: &[u8]) -> Result<IngestionReport, Error> {
        let text = String::from_utf8_lossy(contents);
        let mut report = IngestionReport::default();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            report.processed_lines = line_number;
            let record = PurchaseRecord::parse_line(line);
            report.lines.push(self.store_record(line_number, &record).await);
        }

        info!(
            processed_lines = report.processed_lines,
            failed_inserts = report.failed_inserts(),
            "purchase file ingested"
        );
        Ok(report)
    }
}
