//! Message display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Message;
use crate::output::formatters::{format_timestamp, truncate};

/// Longest message body shown in a table cell
const MAX_CONTENT_WIDTH: usize = 60;

/// Message row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MessageDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "FROM")]
    pub sender_id: String,

    #[tabled(rename = "SENT")]
    pub sent: String,

    #[tabled(rename = "MESSAGE")]
    pub content: String,
}

impl From<Message> for MessageDisplay {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            sent: format_timestamp(message.created_at.as_deref()),
            content: truncate(&message.content, MAX_CONTENT_WIDTH),
        }
    }
}
