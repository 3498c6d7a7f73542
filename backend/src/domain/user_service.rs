//! User lookup service implementing the [`UserQuery`] driving port.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserQuery, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, UserId};

/// Map user repository failures onto domain errors.
pub(crate) fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[derive(Clone)]
pub struct UserService<U> {
    users: Arc<U>,
}

impl<U> UserService<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UserQuery for UserService<U>
where
    U: UserRepository,
{
    async fn get_user_by_id(&self, id: UserId) -> Result<User, Error> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .map_err(map_user_repository_error)?;

        match user {
            Some(user) if !user.is_placeholder() => Ok(user),
            _ => Err(Error::user_not_found()),
        }
    }
}
