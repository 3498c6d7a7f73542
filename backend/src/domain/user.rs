//! Users named by the purchase file.

use std::fmt;

/// Externally supplied user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A purchasing user.
///
/// # Examples
/// ```
/// use purchases::domain::{User, UserId};
///
/// let user = User::new(UserId::new(70), "Palmer Prosacco");
/// assert_eq!(user.name(), "Palmer Prosacco");
/// assert!(!user.is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the zero record a lenient parse produces from a blank line.
    ///
    /// Lookups treat such a row as absent.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.id.value() == 0 && self.name.is_empty()
    }
}
