//! GoChat API client

pub mod api;
pub mod gochat;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod request;

pub use api::{AuthApi, ConversationsApi, FriendsApi, MessagesApi, UsersApi};
pub use gochat::GoChatClient;
#[cfg(test)]
pub use mock::MockGoChatClient;
pub use request::{RawBody, RequestOptions};

/// Every GoChat API operation.
///
/// Implemented automatically for any type implementing all the sub-traits.
#[cfg(test)]
pub trait GoChatApi: AuthApi + FriendsApi + ConversationsApi + MessagesApi + UsersApi {}

#[cfg(test)]
impl<T> GoChatApi for T where T: AuthApi + FriendsApi + ConversationsApi + MessagesApi + UsersApi {}
