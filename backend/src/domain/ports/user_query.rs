//! Driving port for user lookups.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading a single user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Return the user, or a `user_not_found` error.
    async fn get_user_by_id(&self, id: UserId) -> Result<User, Error>;
}
