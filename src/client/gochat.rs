//! GoChat gateway client implementation

use async_trait::async_trait;

use super::api::{AuthApi, ConversationsApi, FriendsApi, MessagesApi, UsersApi};
use super::models::{
    Conversation, ConversationResponse, ConversationsResponse, CreateConversationRequest,
    CreateFriendRequestRequest, CreateFriendRequestResponse, CreateMessageRequest,
    FetchFriendsRequest, FriendRequest, ListConversationsRequest, ListUsersRequest, LoginRequest,
    LoginResponse, Message, MessageResponse, MessagesResponse, NewMessage, NewUser,
    RegisterRequest, RegisterResponse, User, UserFilter, UserIdsFilter, UsersResponse,
    parse_numeric_id,
};
use super::request::{ApiClient, RequestOptions};
use crate::auth::AuthStore;
use crate::config::Config;
use crate::error::Result;

/// Page size used when looking up a single user
const USER_LOOKUP_PAGE_SIZE: u32 = 10;

/// GoChat API client
#[derive(Debug, Clone)]
pub struct GoChatClient {
    api: ApiClient,
}

impl GoChatClient {
    /// Create a client from loaded configuration
    pub fn new(config: &Config, auth: AuthStore) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(&config.api_base_url, auth, config.timeout())?,
        })
    }

    /// Underlying request wrapper, for calls outside the typed catalog
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    async fn fetch_users(&self, user_id: &str, show_friends: bool) -> Result<Vec<User>> {
        let body = FetchFriendsRequest {
            user_id: user_id.to_string(),
            show_friends,
        };
        let response: UsersResponse = self
            .api
            .fetch("/v1/friends", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.users)
    }
}

#[async_trait]
impl AuthApi for GoChatClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.api
            .fetch("/v1/auth/login", RequestOptions::post().json(&body)?)
            .await
    }

    async fn register(&self, user: NewUser) -> Result<User> {
        let body = RegisterRequest { user };
        let response: RegisterResponse = self
            .api
            .fetch("/v1/user", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.user)
    }
}

#[async_trait]
impl FriendsApi for GoChatClient {
    async fn fetch_non_friends(&self, user_id: &str) -> Result<Vec<User>> {
        self.fetch_users(user_id, false).await
    }

    async fn fetch_friends(&self, user_id: &str) -> Result<Vec<User>> {
        self.fetch_users(user_id, true).await
    }

    async fn create_friend_request(
        &self,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<Option<FriendRequest>> {
        let body = CreateFriendRequestRequest {
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
        };
        let response: CreateFriendRequestResponse = self
            .api
            .fetch("/v1/friend-request", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.friend_request)
    }
}

#[async_trait]
impl ConversationsApi for GoChatClient {
    async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let body = ListConversationsRequest {
            user_id: user_id.to_string(),
        };
        let response: ConversationsResponse = self
            .api
            .fetch("/v1/conversations", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.conversations)
    }

    async fn create_conversation(&self, user1_id: &str, user2_id: &str) -> Result<Conversation> {
        let body = CreateConversationRequest {
            user1_id: user1_id.to_string(),
            user2_id: user2_id.to_string(),
        };
        let response: ConversationResponse = self
            .api
            .fetch("/v1/conversation", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.conversation)
    }
}

#[async_trait]
impl MessagesApi for GoChatClient {
    async fn list_messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        let path = format!("/v1/conversations/{}/messages", conversation_id);
        let response: MessagesResponse = self.api.fetch(&path, RequestOptions::get()).await?;
        Ok(response.messages)
    }

    async fn create_message(
        &self,
        conversation_id: &str,
        sender_id: &str,
        content: &str,
    ) -> Result<Option<Message>> {
        let body = CreateMessageRequest {
            message: NewMessage {
                conversation_id: parse_numeric_id(conversation_id)?,
                sender_id: parse_numeric_id(sender_id)?,
                content: content.to_string(),
            },
        };
        let response: MessageResponse = self
            .api
            .fetch("/v1/message", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.message)
    }
}

#[async_trait]
impl UsersApi for GoChatClient {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let body = ListUsersRequest {
            page_size: USER_LOOKUP_PAGE_SIZE,
            filters: vec![UserFilter {
                user_ids: UserIdsFilter {
                    user_id: vec![parse_numeric_id(user_id)?],
                },
            }],
        };
        let response: UsersResponse = self
            .api
            .fetch("/v1/users:list", RequestOptions::post().json(&body)?)
            .await?;
        Ok(response.users.into_iter().next())
    }
}
