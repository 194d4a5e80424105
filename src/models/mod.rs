//! Display models for CLI output
//!
//! Conversions from API response types into table rows and JSON records.

pub mod display;

pub use display::{ConversationDisplay, FriendRequestDisplay, MessageDisplay, UserDisplay};
