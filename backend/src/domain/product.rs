//! Products referenced by order lines.

use std::fmt;

/// Externally supplied product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ProductId(u64);

impl ProductId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product known to the store. Products carry no attributes beyond their id;
/// prices live on the order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
}

impl Product {
    #[must_use]
    pub const fn new(id: ProductId) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }
}
