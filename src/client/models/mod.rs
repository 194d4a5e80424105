//! GoChat gateway data models
//!
//! Request and response shapes for every endpoint the client calls. Responses
//! are decoded into these types so that a change in the gateway's payloads
//! surfaces as an error instead of silently missing data.

mod auth;
mod conversation;
mod friend;
mod id;
mod message;
mod user;

pub use auth::{LoginRequest, LoginResponse, NewUser, RegisterRequest, RegisterResponse};
pub use conversation::{
    Conversation, ConversationResponse, ConversationsResponse, CreateConversationRequest,
    ListConversationsRequest,
};
pub use friend::{
    CreateFriendRequestRequest, CreateFriendRequestResponse, FetchFriendsRequest, FriendRequest,
};
pub use id::parse_numeric_id;
pub use message::{CreateMessageRequest, Message, MessageResponse, MessagesResponse, NewMessage};
pub use user::{ListUsersRequest, User, UserFilter, UserIdsFilter, UsersResponse};
