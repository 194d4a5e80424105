//! Conversation display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Conversation;
use crate::output::formatters::format_timestamp;

/// Conversation row, seen from one participant's side.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ConversationDisplay {
    #[tabled(rename = "CONVERSATION ID")]
    pub id: String,

    /// The participant who is not the viewer
    #[tabled(rename = "WITH USER")]
    pub with_user: String,

    #[tabled(rename = "UPDATED")]
    pub updated: String,
}

impl ConversationDisplay {
    /// Build a row for the conversation as seen by `viewer_id`
    pub fn for_viewer(conversation: Conversation, viewer_id: &str) -> Self {
        let with_user = conversation.other_participant(viewer_id).to_string();
        let updated = format_timestamp(
            conversation
                .updated_at
                .as_deref()
                .or(conversation.created_at.as_deref()),
        );
        Self {
            id: conversation.id,
            with_user,
            updated,
        }
    }
}
