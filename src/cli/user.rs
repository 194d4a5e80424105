//! User command implementations

use crate::cli::handlers::print_list;
use crate::cli::{CommandContext, GlobalOptions};
use crate::client::UsersApi;
use crate::client::models::User;
use crate::error::Result;
use crate::models::UserDisplay;
use crate::router::HOME_PATH;

/// Run the user get command. An unknown user prints an empty result.
pub async fn get(opts: &GlobalOptions, user_id: &str) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.enter(HOME_PATH)?;

    let user = ctx.client.get_user(user_id).await?;
    if user.is_none() {
        log::debug!("User {} not found", user_id);
    }
    print_list::<User, UserDisplay>(user.into_iter().collect(), "users", ctx.format)
}
