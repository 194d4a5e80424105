//! GoChat CLI - terminal client for the GoChat messaging gateway

use clap::Parser;

mod auth;
mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod router;

use cli::friends::FriendView;
use cli::session::Registration;
use cli::{
    Cli, Commands, ConversationsCommands, FriendsCommands, GlobalOptions, MessagesCommands,
    UserCommands,
};
use error::{ApiError, Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        if let Some(hint) = hint_for(&err) {
            eprintln!("  → {}", hint);
        }
        std::process::exit(1);
    }
}

/// Follow-up suggestion for errors a user can act on
fn hint_for(err: &Error) -> Option<&'static str> {
    match err {
        Error::Api(api) if api.status() == Some(401) => {
            Some("The gateway rejected the session. Run 'gochat logout', then 'gochat login'.")
        }
        Error::Api(ApiError::Network(_)) => {
            Some("Check api_base_url in the config file or pass --api-url.")
        }
        _ => None,
    }
}

/// `RUST_LOG` wins over the `--debug` default
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login { email, password } => cli::session::login(&opts, email, password).await,
        Commands::Register {
            first_name,
            last_name,
            user_name,
            email,
            password,
        } => {
            let registration = Registration {
                first_name,
                last_name,
                user_name,
                email,
                password,
            };
            cli::session::register(&opts, registration).await
        }
        Commands::Logout => cli::session::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Open { path } => cli::open::run(&opts, &path),
        Commands::Friends(cmd) => match cmd {
            FriendsCommands::List => cli::friends::list(&opts, FriendView::Friends).await,
            FriendsCommands::Find => cli::friends::list(&opts, FriendView::Strangers).await,
            FriendsCommands::Add { receiver_id } => cli::friends::add(&opts, &receiver_id).await,
        },
        Commands::Conversations(cmd) => match cmd {
            ConversationsCommands::List => cli::conversations::list(&opts).await,
            ConversationsCommands::Create { user_id } => {
                cli::conversations::create(&opts, &user_id).await
            }
        },
        Commands::Messages(cmd) => match cmd {
            MessagesCommands::List { conversation_id } => {
                cli::messages::list(&opts, &conversation_id).await
            }
            MessagesCommands::Send {
                conversation_id,
                content,
            } => cli::messages::send(&opts, &conversation_id, &content).await,
        },
        Commands::User(cmd) => match cmd {
            UserCommands::Get { user_id } => cli::user::get(&opts, &user_id).await,
        },
        Commands::Api(args) => cli::api::run(&opts, &args).await,
    }
}
