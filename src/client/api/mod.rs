//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and registration
//! - [`FriendsApi`] - Friend discovery and friend requests
//! - [`ConversationsApi`] - Conversation listing and creation
//! - [`MessagesApi`] - Messages within a conversation
//! - [`UsersApi`] - User lookup
//!
//! The [`GoChatApi`](super::GoChatApi) super-trait combines all of them.

mod auth;
mod conversations;
mod friends;
mod messages;
mod users;

pub use auth::AuthApi;
pub use conversations::ConversationsApi;
pub use friends::FriendsApi;
pub use messages::MessagesApi;
pub use users::UsersApi;
