//! Status command implementation

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::output::json::format_json_value;

/// Claims read from a JWT payload, for display only.
///
/// The signature is not checked and expiry is never enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TokenClaims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Decode the payload segment of a JWT. Returns `None` for opaque tokens.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Value = serde_json::from_slice(&bytes).ok()?;

    let user_id = match claims.get("user_id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    };
    let expires_at = claims
        .get("exp")
        .and_then(Value::as_i64)
        .and_then(|exp| DateTime::from_timestamp(exp, 0));

    Some(TokenClaims {
        user_id,
        expires_at,
    })
}

/// Machine-readable status
#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    api_base_url: String,
    logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<TokenClaims>,
}

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.auth.token();
    let claims = token.as_deref().and_then(decode_claims);

    if ctx.format == OutputFormat::Json {
        let report = StatusReport {
            config_path: ctx.config_path.display().to_string(),
            api_base_url: ctx.config.api_base_url.clone(),
            logged_in: token.is_some(),
            user_id: ctx.auth.user_id(),
            token: claims,
        };
        println!("{}", format_json_value(&report)?);
        return Ok(());
    }

    println!("{}\n", "GoChat Status".bold());

    let config_path = ctx.config_path.display().to_string();
    if ctx.config_path.exists() {
        println!("Config file: {}", config_path.cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.cyan(),
            "(not found, using defaults)".dimmed()
        );
    }
    println!("API base URL: {}", ctx.config.api_base_url.cyan());
    println!();

    if token.is_none() {
        println!("{} Not logged in", "✗".red());
        println!("  → Run 'gochat login' to log in");
        println!();
        return Ok(());
    }

    match ctx.auth.user_id() {
        Some(user_id) => println!("{} Logged in as user {}", "✓".green(), user_id.bold()),
        None => println!("{} Logged in (user unknown)", "⚠".yellow()),
    }

    match claims {
        Some(claims) => {
            if let Some(user_id) = claims.user_id {
                println!("{} Token issued for user {}", "○".dimmed(), user_id);
            }
            if let Some(expires_at) = claims.expires_at {
                let remaining = expires_at.signed_duration_since(Utc::now());
                if remaining.num_seconds() > 0 {
                    println!(
                        "{} Token expires in {}h {}m",
                        "○".dimmed(),
                        remaining.num_hours(),
                        remaining.num_minutes() % 60
                    );
                } else {
                    println!("{} Token expiry has passed", "⚠".yellow());
                }
            }
        }
        None => println!("{} Token is not a readable JWT", "○".dimmed()),
    }

    println!();
    Ok(())
}
