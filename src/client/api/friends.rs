//! Friends API trait

use async_trait::async_trait;

use crate::client::models::{FriendRequest, User};
use crate::error::Result;

/// Friend discovery and friend requests.
///
/// User ids are sent as strings on these endpoints.
#[async_trait]
pub trait FriendsApi: Send + Sync {
    /// Users who are not yet friends with `user_id`
    async fn fetch_non_friends(&self, user_id: &str) -> Result<Vec<User>>;

    /// Users who are friends with `user_id`
    async fn fetch_friends(&self, user_id: &str) -> Result<Vec<User>>;

    /// Send a friend request. Returns the created request when the gateway
    /// echoes it back.
    async fn create_friend_request(
        &self,
        sender_id: &str,
        receiver_id: &str,
    ) -> Result<Option<FriendRequest>>;
}
