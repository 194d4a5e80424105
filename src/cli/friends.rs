//! Friend command implementations

use colored::Colorize;

use crate::cli::handlers::print_list;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::FriendsApi;
use crate::client::models::{FriendRequest, User};
use crate::error::Result;
use crate::models::{FriendRequestDisplay, UserDisplay};
use crate::output::json::format_json_value;
use crate::router::{FIND_FRIENDS_PATH, FRIENDS_PATH};

/// Which side of the friend graph to list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendView {
    Friends,
    Strangers,
}

impl FriendView {
    fn page(self) -> &'static str {
        match self {
            Self::Friends => FRIENDS_PATH,
            Self::Strangers => FIND_FRIENDS_PATH,
        }
    }
}

/// Fetch friends or non-friends of `user_id`
pub async fn fetch_view<A: FriendsApi + ?Sized>(
    api: &A,
    user_id: &str,
    view: FriendView,
) -> Result<Vec<User>> {
    match view {
        FriendView::Friends => api.fetch_friends(user_id).await,
        FriendView::Strangers => api.fetch_non_friends(user_id).await,
    }
}

/// Send a friend request, describing it even when the gateway returns no body
pub async fn send_request<A: FriendsApi + ?Sized>(
    api: &A,
    sender_id: &str,
    receiver_id: &str,
) -> Result<FriendRequestDisplay> {
    let request = api
        .create_friend_request(sender_id, receiver_id)
        .await?
        .unwrap_or_else(|| FriendRequest {
            id: "--".to_string(),
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            status: String::new(),
            created_at: None,
        });
    Ok(FriendRequestDisplay::from(request))
}

/// Run the friends list/find commands
pub async fn list(opts: &GlobalOptions, view: FriendView) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let user_id = ctx.enter_as_user(view.page())?;

    let users = fetch_view(&ctx.client, &user_id, view).await?;
    print_list::<User, UserDisplay>(users, "users", ctx.format)
}

/// Run the friends add command
pub async fn add(opts: &GlobalOptions, receiver_id: &str) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let user_id = ctx.enter_as_user(FIND_FRIENDS_PATH)?;

    let request = send_request(&ctx.client, &user_id, receiver_id).await?;
    match ctx.format {
        OutputFormat::Table => println!(
            "{} Friend request sent to user {}",
            "✓".green(),
            request.receiver_id.bold()
        ),
        OutputFormat::Json => println!("{}", format_json_value(&request)?),
    }
    Ok(())
}
