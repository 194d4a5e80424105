//! Display model implementations for table and JSON output

mod conversation;
mod friend;
mod message;
mod user;

pub use conversation::ConversationDisplay;
pub use friend::FriendRequestDisplay;
pub use message::MessageDisplay;
pub use user::UserDisplay;
