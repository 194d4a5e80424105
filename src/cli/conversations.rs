//! Conversation command implementations

use crate::cli::handlers::print_rows;
use crate::cli::{CommandContext, GlobalOptions};
use crate::client::ConversationsApi;
use crate::error::Result;
use crate::models::ConversationDisplay;
use crate::router::CONVERSATIONS_PATH;

/// Conversations of `user_id`, each shown from that user's side
pub async fn conversation_rows<A: ConversationsApi + ?Sized>(
    api: &A,
    user_id: &str,
) -> Result<Vec<ConversationDisplay>> {
    let conversations = api.list_conversations(user_id).await?;
    Ok(conversations
        .into_iter()
        .map(|c| ConversationDisplay::for_viewer(c, user_id))
        .collect())
}

/// Run the conversations list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let user_id = ctx.enter_as_user(CONVERSATIONS_PATH)?;

    let rows = conversation_rows(&ctx.client, &user_id).await?;
    print_rows(rows, "conversations", ctx.format)
}

/// Run the conversations create command
pub async fn create(opts: &GlobalOptions, other_user_id: &str) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let user_id = ctx.enter_as_user(CONVERSATIONS_PATH)?;

    let conversation = ctx
        .client
        .create_conversation(&user_id, other_user_id)
        .await?;
    let row = ConversationDisplay::for_viewer(conversation, &user_id);
    print_rows(vec![row], "conversations", ctx.format)
}
