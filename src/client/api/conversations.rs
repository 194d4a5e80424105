//! Conversations API trait

use async_trait::async_trait;

use crate::client::models::Conversation;
use crate::error::Result;

/// Conversation operations. User ids are sent as strings.
#[async_trait]
pub trait ConversationsApi: Send + Sync {
    /// All conversations `user_id` takes part in
    async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>>;

    /// Start a conversation between two users
    async fn create_conversation(&self, user1_id: &str, user2_id: &str) -> Result<Conversation>;
}
