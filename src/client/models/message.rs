//! Message models

use serde::{Deserialize, Serialize};

use super::id::deserialize_id;

/// Chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    #[serde(alias = "conversationId", deserialize_with = "deserialize_id")]
    pub conversation_id: String,

    #[serde(alias = "senderId", deserialize_with = "deserialize_id")]
    pub sender_id: String,

    #[serde(default)]
    pub content: String,

    #[serde(
        default,
        alias = "createdAt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

/// `{messages: [...]}` envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Body of `POST /v1/message`
#[derive(Debug, Clone, Serialize)]
pub struct CreateMessageRequest {
    pub message: NewMessage,
}

/// Message to create. Ids travel as integers on this endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub conversation_id: i64,
    pub sender_id: i64,
    pub content: String,
}

/// `{message: {...}}` envelope; the gateway may omit the echo
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<Message>,
}
