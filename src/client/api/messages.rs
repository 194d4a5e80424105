//! Messages API trait

use async_trait::async_trait;

use crate::client::models::Message;
use crate::error::Result;

/// Message operations within a conversation
#[async_trait]
pub trait MessagesApi: Send + Sync {
    /// Messages of a conversation, in the order the gateway returns them
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>>;

    /// Post a message.
    ///
    /// Both ids must be base-10 integers: this endpoint takes numeric ids and
    /// anything else fails with `ApiError::InvalidId` before a request is made.
    async fn create_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<Option<Message>>;
}
