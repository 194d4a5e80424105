//! Command execution context
//!
//! Loads configuration, opens the credential store and builds the API client
//! and router once, so handlers start from a ready-made context.

use std::path::PathBuf;

use crate::auth::{AuthStore, FileStorage};
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::GoChatClient;
use crate::config::Config;
use crate::error::{NavigationError, Result};
use crate::router::{Route, Router};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded and validated configuration
    pub config: Config,
    /// Where the configuration was (or would be) loaded from
    pub config_path: PathBuf,
    /// Persisted session credentials
    pub auth: AuthStore,
    /// Gateway client sharing `auth`
    pub client: GoChatClient,
    /// Page navigation guarded by `auth`
    pub router: Router,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be parsed or the base URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_at(opts.config_ref())?.with_api_base_url(opts.api_url_ref())?;

        let storage = FileStorage::new(config.credentials_path_for(&config_path));
        log::debug!("Using credentials at {}", storage.path().display());

        let auth = AuthStore::new(storage);
        let client = GoChatClient::new(&config, auth.clone())?;
        let router = Router::new(auth.clone());

        Ok(Self {
            config,
            config_path,
            auth,
            client,
            router,
            format: opts.format,
        })
    }

    /// Navigate to the page a command stands for, failing when the route
    /// guard sends the user elsewhere.
    pub fn enter(&mut self, page: &str) -> Result<&'static Route> {
        self.router.require(page)
    }

    /// Enter a protected page and return the logged-in user's ID.
    pub fn enter_as_user(&mut self, page: &str) -> Result<String> {
        self.enter(page)?;
        self.require_user_id()
    }

    /// ID of the logged-in user.
    pub fn require_user_id(&self) -> Result<String> {
        self.auth
            .user_id()
            .ok_or_else(|| NavigationError::LoginRequired.into())
    }
}
