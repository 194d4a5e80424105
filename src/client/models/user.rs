//! User models

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// GoChat user, as projected by the gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// User ID
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub user_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Creation time (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// First and last name joined, or `--` when neither is set
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            "--".to_string()
        } else {
            name.to_string()
        }
    }
}

/// `{users: [...]}` envelope shared by the friends and user listing endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Body of `POST /v1/users:list`
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersRequest {
    pub page_size: u32,
    pub filters: Vec<UserFilter>,
}

/// One entry of the user listing filter list
#[derive(Debug, Clone, Serialize)]
pub struct UserFilter {
    pub user_ids: UserIdsFilter,
}

/// Filter matching users by numeric id
#[derive(Debug, Clone, Serialize)]
pub struct UserIdsFilter {
    pub user_id: Vec<i64>,
}
