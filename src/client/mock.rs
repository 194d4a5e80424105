//! Mock GoChat API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! command handlers without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ConversationsApi, FriendsApi, MessagesApi, UsersApi};
use super::models::{Conversation, FriendRequest, LoginResponse, Message, NewUser, User, parse_numeric_id};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockGoChatClient::new().with_users(vec![user("2", "bo")]).await;
///
/// let users = mock.fetch_non_friends("1").await?;
/// assert_eq!(users.len(), 1);
/// ```
#[derive(Default)]
pub struct MockGoChatClient {
    /// Users returned from user-listing calls and looked up by `get_user`
    users: Arc<Mutex<Vec<User>>>,
    /// Conversations returned from list_conversations
    conversations: Arc<Mutex<Vec<Conversation>>>,
    /// Messages returned from list_messages
    messages: Arc<Mutex<Vec<Message>>>,
    /// Login result returned from login
    login: Arc<Mutex<Option<LoginResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured calls for test assertions
    captured: Arc<Mutex<Vec<CapturedCall>>>,
}

/// A captured API call for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedCall {
    /// The API method called (e.g., "create_message")
    pub method: String,
    /// Arguments in call order
    pub args: Vec<String>,
}

impl MockGoChatClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure users returned from listing and lookup calls.
    pub async fn with_users(self, users: Vec<User>) -> Self {
        *self.users.lock().await = users;
        self
    }

    /// Configure conversations returned from list_conversations.
    pub async fn with_conversations(self, conversations: Vec<Conversation>) -> Self {
        *self.conversations.lock().await = conversations;
        self
    }

    /// Configure messages returned from list_messages.
    pub async fn with_messages(self, messages: Vec<Message>) -> Self {
        *self.messages.lock().await = messages;
        self
    }

    /// Configure the login result.
    pub async fn with_login(self, user_id: &str, token: &str) -> Self {
        *self.login.lock().await = Some(LoginResponse {
            user_id: user_id.to_string(),
            token: token.to_string(),
        });
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get all captured calls for test assertions.
    pub async fn captured(&self) -> Vec<CapturedCall> {
        self.captured.lock().await.clone()
    }

    /// Record the call, then return the pending error if one is set.
    async fn record(&self, method: &str, args: &[&str]) -> Result<()> {
        self.captured.lock().await.push(CapturedCall {
            method: method.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        });

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

/// Build a user with the given id and user name.
pub fn user(id: &str, user_name: &str) -> User {
    User {
        id: id.to_string(),
        first_name: "Test".to_string(),
        last_name: user_name.to_string(),
        user_name: user_name.to_string(),
        email: None,
        created_at: None,
    }
}

/// Build a conversation between two users.
pub fn conversation(id: &str, user1_id: &str, user2_id: &str) -> Conversation {
    Conversation {
        id: id.to_string(),
        user1_id: user1_id.to_string(),
        user2_id: user2_id.to_string(),
        created_at: None,
        updated_at: None,
    }
}

/// Build a message.
pub fn message(id: &str, conversation_id: &str, sender_id: &str, content: &str) -> Message {
    Message {
        id: id.to_string(),
        conversation_id: conversation_id.to_string(),
        sender_id: sender_id.to_string(),
        content: content.to_string(),
        created_at: None,
    }
}

// ============================================================================
// API Implementations
// ============================================================================

#[async_trait]
impl AuthApi for MockGoChatClient {
    async fn login(&self, email: &str, _password: &str) -> Result<LoginResponse> {
        self.record("login", &[email]).await?;
        self.login.lock().await.clone().ok_or_else(|| {
            ApiError::Http {
                status: 404,
                message: Some("user not found".to_string()),
            }
            .into()
        })
    }

    async fn register(&self, new_user: NewUser) -> Result<User> {
        self.record("register", &[&new_user.user_name]).await?;
        Ok(User {
            id: "100".to_string(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            user_name: new_user.user_name,
            email: Some(new_user.email),
            created_at: None,
        })
    }
}

#[async_trait]
impl FriendsApi for MockGoChatClient {
    async fn fetch_non_friends(&self, user_id: &str) -> Result<Vec<User>> {
        self.record("fetch_non_friends", &[user_id]).await?;
        Ok(self.users.lock().await.clone())
    }

    async fn fetch_friends(&self, user_id: &str) -> Result<Vec<User>> {
        self.record("fetch_friends", &[user_id]).await?;
        Ok(self.users.lock().await.clone())
    }

    async fn create_friend_request(
        &self,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<Option<FriendRequest>> {
        self.record("create_friend_request", &[sender_id, receiver_id])
            .await?;
        Ok(Some(FriendRequest {
            id: "1".to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            status: "pending".to_string(),
            created_at: None,
        }))
    }
}

#[async_trait]
impl ConversationsApi for MockGoChatClient {
    async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        self.record("list_conversations", &[user_id]).await?;
        Ok(self.conversations.lock().await.clone())
    }

    async fn create_conversation(&self, user1_id: &str, user2_id: &str) -> Result<Conversation> {
        self.record("create_conversation", &[user1_id, user2_id])
            .await?;
        Ok(conversation("1", user1_id, user2_id))
    }
}

#[async_trait]
impl MessagesApi for MockGoChatClient {
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        self.record("list_messages", &[conversation_id]).await?;
        Ok(self.messages.lock().await.clone())
    }

    async fn create_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<Option<Message>> {
        parse_numeric_id(conversation_id)?;
        parse_numeric_id(sender_id)?;
        self.record("create_message", &[conversation_id, sender_id, content])
            .await?;
        Ok(Some(message("1", conversation_id, sender_id, content)))
    }
}

#[async_trait]
impl UsersApi for MockGoChatClient {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        parse_numeric_id(user_id)?;
        self.record("get_user", &[user_id]).await?;
        let users = self.users.lock().await;
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GoChatApi;

    fn assert_full_api<T: GoChatApi>(_: &T) {}

    #[tokio::test]
    async fn test_mock_implements_full_api() {
        let mock = MockGoChatClient::new();
        assert_full_api(&mock);
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockGoChatClient::new()
            .with_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.fetch_friends("1").await.is_err());
        assert!(mock.fetch_friends("1").await.is_ok());
        assert_eq!(mock.captured().await.len(), 2);
    }

    #[tokio::test]
    async fn test_mock_get_user_by_id() {
        let mock = MockGoChatClient::new()
            .with_users(vec![user("1", "ada"), user("2", "bo")])
            .await;

        assert_eq!(mock.get_user("2").await.unwrap().unwrap().user_name, "bo");
        assert!(mock.get_user("3").await.unwrap().is_none());
        assert!(mock.get_user("x").await.is_err());
    }
}
