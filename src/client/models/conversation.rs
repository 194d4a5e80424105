//! Conversation models

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Two-party conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(deserialize_with = "deserialize_id")]
    pub user1_id: String,

    #[serde(deserialize_with = "deserialize_id")]
    pub user2_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Conversation {
    /// The participant that is not `user_id`
    pub fn other_participant(&self, user_id: &str) -> &str {
        if self.user1_id == user_id {
            &self.user2_id
        } else {
            &self.user1_id
        }
    }
}

/// Body of `POST /v1/conversations`
#[derive(Debug, Clone, Serialize)]
pub struct ListConversationsRequest {
    pub user_id: String,
}

/// `{conversations: [...]}` envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversationsResponse {
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

/// Body of `POST /v1/conversation`. Ids travel as strings.
#[derive(Debug, Clone, Serialize)]
pub struct CreateConversationRequest {
    pub user1_id: String,
    pub user2_id: String,
}

/// `{conversation: {...}}` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationResponse {
    pub conversation: Conversation,
}
