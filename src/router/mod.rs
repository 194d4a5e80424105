//! Page routing and the authentication guard
//!
//! Mirrors the web client's page table. Every navigation resolves static
//! redirects, then runs [`guard`]: logged-out users are sent to `/login` from
//! protected pages, logged-in users are sent to `/home` from the login and
//! register pages. The guard only checks whether a token is stored.

use crate::auth::AuthStore;
use crate::error::{NavigationError, Result};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/home";
pub const FIND_FRIENDS_PATH: &str = "/find-friends";
pub const FRIEND_REQUESTS_PATH: &str = "/friend-requests";
pub const FRIENDS_PATH: &str = "/friends";
pub const CONVERSATIONS_PATH: &str = "/conversations";

/// Upper bound on redirects followed for one navigation
const MAX_REDIRECTS: usize = 8;

/// A page the client can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

impl Route {
    const fn public(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: false,
        }
    }

    const fn protected(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            requires_auth: true,
        }
    }

    /// Login and register pages, which a logged-in user is kept away from
    pub fn is_auth_page(&self) -> bool {
        self.path == LOGIN_PATH || self.path == REGISTER_PATH
    }
}

/// Known pages.
///
/// `/friend-requests` has no command of its own yet (the gateway's list and
/// update friend-request calls are not wired up); `gochat open` reaches it.
pub const ROUTES: &[Route] = &[
    Route::public(LOGIN_PATH, "Login"),
    Route::public(REGISTER_PATH, "Register"),
    Route::protected(HOME_PATH, "Home"),
    Route::protected(FIND_FRIENDS_PATH, "FindFriends"),
    Route::protected(FRIEND_REQUESTS_PATH, "FriendRequests"),
    Route::protected(FRIENDS_PATH, "Friends"),
    Route::protected(CONVERSATIONS_PATH, "Conversations"),
];

/// Look up a page by path. Query strings and a trailing slash are ignored.
pub fn find_route(path: &str) -> Option<&'static Route> {
    let path = normalize(path);
    ROUTES.iter().find(|route| route.path == path)
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

/// Result of resolving one navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Show the page
    Proceed(&'static Route),
    /// Go elsewhere instead
    Redirect { to: &'static str, replace: bool },
}

/// The authentication guard, evaluated for a matched page
pub fn guard(route: &'static Route, authenticated: bool) -> Navigation {
    if route.requires_auth && !authenticated {
        return Navigation::Redirect {
            to: LOGIN_PATH,
            replace: true,
        };
    }
    if route.is_auth_page() && authenticated {
        return Navigation::Redirect {
            to: HOME_PATH,
            replace: true,
        };
    }
    Navigation::Proceed(route)
}

/// One navigation step: static redirects for `/` and unknown paths, then the guard
pub fn resolve(path: &str, authenticated: bool) -> Navigation {
    match find_route(path) {
        Some(route) => guard(route, authenticated),
        None => Navigation::Redirect {
            to: LOGIN_PATH,
            replace: false,
        },
    }
}

/// Navigation state over a credential store
#[derive(Debug, Clone)]
pub struct Router {
    auth: AuthStore,
    history: Vec<&'static str>,
}

impl Router {
    pub fn new(auth: AuthStore) -> Self {
        Self {
            auth,
            history: Vec::new(),
        }
    }

    /// Navigate to `path`, following redirects until a page is shown.
    ///
    /// The landing page is pushed onto the history, or replaces the current
    /// entry when a redirect asked for that.
    pub fn navigate(&mut self, path: &str) -> Result<&'static Route> {
        let authenticated = self.auth.is_authenticated();
        let mut target = path.to_string();
        let mut replace = false;

        for _ in 0..=MAX_REDIRECTS {
            match resolve(&target, authenticated) {
                Navigation::Proceed(route) => {
                    match self.history.last_mut() {
                        Some(current) if replace => *current = route.path,
                        _ => self.history.push(route.path),
                    }
                    return Ok(route);
                }
                Navigation::Redirect { to, replace: r } => {
                    log::debug!("Redirecting {} -> {}", target, to);
                    replace |= r;
                    target = to.to_string();
                }
            }
        }

        Err(NavigationError::RedirectLoop(path.to_string(), MAX_REDIRECTS).into())
    }

    /// Page currently shown
    #[cfg(test)]
    pub fn current(&self) -> Option<&'static str> {
        self.history.last().copied()
    }

    /// Visited pages, oldest first
    #[cfg(test)]
    pub fn history(&self) -> &[&'static str] {
        &self.history
    }

    /// Navigate to a page a command needs, failing if the guard sends the
    /// user elsewhere.
    pub fn require(&mut self, path: &str) -> Result<&'static Route> {
        let route = self.navigate(path)?;
        if route.path == normalize(path) {
            return Ok(route);
        }

        if route.path == LOGIN_PATH {
            Err(NavigationError::LoginRequired.into())
        } else {
            let user = self.auth.user_id().unwrap_or_else(|| "?".to_string());
            Err(NavigationError::AlreadyLoggedIn(user).into())
        }
    }
}
