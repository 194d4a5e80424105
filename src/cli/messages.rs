//! Message command implementations

use colored::Colorize;

use crate::cli::handlers::{print_list, print_rows};
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::MessagesApi;
use crate::client::models::Message;
use crate::error::Result;
use crate::models::MessageDisplay;
use crate::router::CONVERSATIONS_PATH;

/// Run the messages list command
pub async fn list(opts: &GlobalOptions, conversation_id: &str) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.enter(CONVERSATIONS_PATH)?;

    let messages = ctx.client.list_messages(conversation_id).await?;
    print_list::<Message, MessageDisplay>(messages, "messages", ctx.format)
}

/// Send `content` to a conversation as `sender_id`.
///
/// Empty messages are rejected before any request is made.
pub async fn send_message<A: MessagesApi + ?Sized>(
    api: &A,
    conversation_id: &str,
    sender_id: &str,
    content: &str,
) -> Result<Option<Message>> {
    if content.trim().is_empty() {
        return Err(crate::error::Error::Other(
            "Message content cannot be empty".to_string(),
        ));
    }
    api.create_message(conversation_id, sender_id, content).await
}

/// Run the messages send command
pub async fn send(opts: &GlobalOptions, conversation_id: &str, content: &str) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let user_id = ctx.enter_as_user(CONVERSATIONS_PATH)?;

    match send_message(&ctx.client, conversation_id, &user_id, content).await? {
        Some(message) => print_rows(vec![MessageDisplay::from(message)], "messages", ctx.format),
        None => {
            if ctx.format == OutputFormat::Table {
                println!("{} Message sent", "✓".green());
            } else {
                print_rows(Vec::<MessageDisplay>::new(), "messages", ctx.format)?;
            }
            Ok(())
        }
    }
}
