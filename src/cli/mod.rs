//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod api;
pub mod args;
pub mod context;
pub mod conversations;
pub mod friends;
pub mod handlers;
pub mod messages;
pub mod open;
pub mod session;
pub mod status;
pub mod user;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// GoChat CLI - chat with friends from the terminal
#[derive(Parser, Debug)]
#[command(name = "gochat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "GOCHAT_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "GOCHAT_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the gateway base URL
    #[arg(long, global = true, env = "GOCHAT_API_BASE_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GOCHAT_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long)]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, env = "GOCHAT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account, then log in
    Register {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        user_name: String,

        #[arg(long)]
        email: String,

        /// Account password (prompted when omitted)
        #[arg(long, env = "GOCHAT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// Navigate to a page and show where the route guard lands
    #[command(after_help = "\
Pages: /login /register /home /find-friends /friend-requests /friends /conversations
/friend-requests has no dedicated command; open is the only way to reach it.")]
    Open {
        /// Page path, e.g. /friends
        path: String,
    },

    /// Manage friends
    #[command(subcommand)]
    Friends(FriendsCommands),

    /// List and start conversations
    #[command(subcommand)]
    Conversations(ConversationsCommands),

    /// Read and send messages
    #[command(subcommand)]
    Messages(MessagesCommands),

    /// Look up users
    #[command(subcommand)]
    User(UserCommands),

    /// Send a raw request to the gateway with the stored credentials
    Api(ApiArgs),
}

/// Friend subcommands
#[derive(Subcommand, Debug)]
pub enum FriendsCommands {
    /// List your friends
    List,

    /// List users you are not friends with yet
    Find,

    /// Send a friend request
    Add {
        /// User ID to send the request to
        receiver_id: String,
    },
}

/// Conversation subcommands
#[derive(Subcommand, Debug)]
pub enum ConversationsCommands {
    /// List your conversations
    List,

    /// Start a conversation with another user
    Create {
        /// The other participant's user ID
        user_id: String,
    },
}

/// Message subcommands
#[derive(Subcommand, Debug)]
pub enum MessagesCommands {
    /// List messages in a conversation
    List {
        /// Conversation ID
        conversation_id: String,
    },

    /// Send a message as the logged-in user
    Send {
        /// Conversation ID
        conversation_id: String,

        /// Message text
        content: String,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Show a single user
    Get {
        /// User ID
        user_id: String,
    },
}

/// Arguments for the raw `api` command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// Request path, appended to the base URL (e.g. /v1/friends)
    pub path: String,

    /// HTTP method
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// JSON payload; takes precedence over every other body flag
    #[arg(long)]
    pub json: Option<String>,

    /// Body field as key=value, sent as a JSON object (repeatable)
    #[arg(short = 'f', long = "field")]
    pub fields: Vec<String>,

    /// Text body, sent untouched
    #[arg(short = 'd', long, conflicts_with = "fields")]
    pub data: Option<String>,

    /// Read a binary body from a file, sent untouched
    #[arg(long, conflicts_with_all = ["fields", "data"])]
    pub data_file: Option<PathBuf>,

    /// Extra header as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}
