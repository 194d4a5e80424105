//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{LoginResponse, NewUser, User};
use crate::error::Result;

/// Account operations that work without a stored credential
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange email and password for a bearer token
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// Create an account. The gateway does not log the new user in.
    async fn register(&self, user: NewUser) -> Result<User>;
}
