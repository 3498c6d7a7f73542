//! Driving port for purchase file ingestion, with its per-line report.

use async_trait::async_trait;

use crate::domain::Error;

/// Result of a single insert attempted while ingesting a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was stored, or an identical id was already present.
    Stored,
    /// The insert failed; ingestion carried on.
    Failed { reason: String },
}

impl InsertOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome of the four inserts derived from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// One-based position of the line in the file.
    pub line_number: usize,
    pub user: InsertOutcome,
    pub product: InsertOutcome,
    pub order: InsertOutcome,
    pub order_product: InsertOutcome,
}

impl LineOutcome {
    /// A line whose inserts all succeeded.
    #[must_use]
    pub fn stored(line_number: usize) -> Self {
        Self {
            line_number,
            user: InsertOutcome::Stored,
            product: InsertOutcome::Stored,
            order: InsertOutcome::Stored,
            order_product: InsertOutcome::Stored,
        }
    }

    /// Number of failed inserts on this line.
    #[must_use]
    pub fn failures(&self) -> usize {
        [&self.user, &self.product, &self.order, &self.order_product]
            .into_iter()
            .filter(|outcome| outcome.is_failed())
            .count()
    }
}

/// Summary of an ingestion run.
///
/// `processed_lines` counts lines read, not successful writes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestionReport {
    pub processed_lines: usize,
    pub lines: Vec<LineOutcome>,
}

impl IngestionReport {
    /// Total failed inserts across every line.
    #[must_use]
    pub fn failed_inserts(&self) -> usize {
        self.lines.iter().map(LineOutcome::failures).sum()
    }
}

/// Domain use-case port for loading a purchase file.
///
/// Per-entity insert failures are reported, never raised; an `Err` means the
/// upload could not be processed at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseFileCommand: Send + Sync {
    async fn load_purchase_file(&self, contents: &[u8]) -> Result<IngestionReport, Error>;
}
