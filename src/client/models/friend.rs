//! Friendship models

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Friend request between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FriendRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(deserialize_with = "deserialize_id")]
    pub sender_id: String,

    #[serde(deserialize_with = "deserialize_id")]
    pub receiver_id: String,

    /// pending, accepted or rejected (the gateway may use its enum names)
    #[serde(default)]
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /v1/friends`. The user id travels as a string.
#[derive(Debug, Clone, Serialize)]
pub struct FetchFriendsRequest {
    pub user_id: String,
    /// `true` lists friends, `false` lists everyone else
    pub show_friends: bool,
}

/// Body of `POST /v1/friend-request`. Ids travel as strings.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFriendRequestRequest {
    pub sender_id: String,
    pub receiver_id: String,
}

/// `{friend_request: {...}}` envelope; the gateway may omit the echo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFriendRequestResponse {
    #[serde(default)]
    pub friend_request: Option<FriendRequest>,
}
