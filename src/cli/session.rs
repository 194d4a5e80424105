//! Login, registration and logout

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use serde_json::json;

use crate::auth::AuthStore;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::AuthApi;
use crate::client::models::{LoginResponse, NewUser, User};
use crate::error::Result;
use crate::output::json::format_json_value;
use crate::router::{HOME_PATH, LOGIN_PATH, REGISTER_PATH};

/// Account details collected by `gochat register`
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: Option<String>,
}

/// Log in and persist the returned credential.
///
/// Nothing is stored when the login call fails.
pub async fn log_in<A: AuthApi + ?Sized>(
    api: &A,
    auth: &AuthStore,
    email: &str,
    password: &str,
) -> Result<LoginResponse> {
    let session = api.login(email, password).await?;
    auth.save_auth(&session.token, &session.user_id)?;
    log::debug!("Stored credential for user {}", session.user_id);
    Ok(session)
}

/// Create the account, then log in with the same email and password.
pub async fn sign_up<A: AuthApi + ?Sized>(
    api: &A,
    auth: &AuthStore,
    new_user: NewUser,
) -> Result<(User, LoginResponse)> {
    let email = new_user.email.clone();
    let password = new_user.password.clone();

    let user = api.register(new_user).await?;
    let session = log_in(api, auth, &email, &password).await?;
    Ok((user, session))
}

fn prompt_email() -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Email")
        .interact_text()?)
}

fn prompt_password() -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Password")
        .interact()?)
}

fn print_session(session: &LoginResponse, page: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            println!(
                "{} Logged in as user {}",
                "✓".green(),
                session.user_id.bold()
            );
        }
        OutputFormat::Json => {
            let value = json!({ "user_id": session.user_id, "page": page });
            println!("{}", format_json_value(&value)?);
        }
    }
    Ok(())
}

/// Run the login command
pub async fn login(
    opts: &GlobalOptions,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.enter(LOGIN_PATH)?;

    let email = match email {
        Some(email) => email,
        None => prompt_email()?,
    };
    let password = match password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let session = log_in(&ctx.client, &ctx.auth, &email, &password).await?;
    let landing = ctx.router.navigate(HOME_PATH)?;

    print_session(&session, landing.path, ctx.format)
}

/// Run the register command
pub async fn register(opts: &GlobalOptions, registration: Registration) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    ctx.enter(REGISTER_PATH)?;

    let password = match registration.password {
        Some(password) => password,
        None => prompt_password()?,
    };
    let new_user = NewUser {
        first_name: registration.first_name,
        last_name: registration.last_name,
        user_name: registration.user_name,
        email: registration.email,
        password,
    };

    let (user, session) = sign_up(&ctx.client, &ctx.auth, new_user).await?;
    if ctx.format == OutputFormat::Table {
        println!("{} Created account {}", "✓".green(), user.user_name.bold());
    }

    let landing = ctx.router.navigate(HOME_PATH)?;
    print_session(&session, landing.path, ctx.format)
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let mut ctx = CommandContext::new(opts)?;
    let was_logged_in = ctx.auth.is_authenticated();

    ctx.auth.clear_auth()?;
    ctx.router.navigate(LOGIN_PATH)?;

    if was_logged_in {
        println!("{} Logged out", "✓".green());
    } else {
        println!("{} Not logged in", "○".dimmed());
    }
    Ok(())
}
