//! Users API trait

use async_trait::async_trait;

use crate::client::models::User;
use crate::error::Result;

/// User lookup
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// Fetch one user by numeric id, or `None` when the gateway knows no
    /// such user. A non-numeric id fails with `ApiError::InvalidId`.
    async fn get_user(&self, user_id: &str) -> Result<Option<User>>;
}
