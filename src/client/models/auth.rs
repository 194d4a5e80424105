//! Login and registration models

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;
use super::user::User;

/// Body of `POST /v1/auth/login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the token to persist and whose it is
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,
    pub token: String,
}

/// Account details for registration
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /v1/user`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub user: NewUser,
}

/// `{user: {...}}` envelope returned by registration
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
}
