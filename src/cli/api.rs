//! Raw gateway requests
//!
//! `gochat api` sends one request through the same wrapper the typed calls
//! use, so the stored credential and error mapping apply.

use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use serde_json::{Map, Value};

use crate::cli::{ApiArgs, CommandContext, GlobalOptions};
use crate::client::{RawBody, RequestOptions};
use crate::error::{Error, Result};
use crate::output::json::format_json_value;

fn invalid(message: String) -> Error {
    Error::Other(message)
}

/// Parse a `Name: value` header argument
pub fn parse_header(raw: &str) -> Result<(HeaderName, HeaderValue)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| invalid(format!("Header must look like 'Name: value' (got {:?})", raw)))?;

    let name = HeaderName::from_bytes(name.trim().as_bytes())
        .map_err(|e| invalid(format!("Invalid header name {:?}: {}", name.trim(), e)))?;
    let value = HeaderValue::from_str(value.trim())
        .map_err(|e| invalid(format!("Invalid value for header {}: {}", name, e)))?;
    Ok((name, value))
}

/// Parse `key=value` body fields into a JSON object of strings
pub fn parse_fields(fields: &[String]) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for field in fields {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| invalid(format!("Field must look like key=value (got {:?})", field)))?;
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(map)
}

/// Build request options from command-line arguments
pub fn build_request(args: &ApiArgs) -> Result<RequestOptions> {
    let method = Method::from_bytes(args.method.to_uppercase().as_bytes())
        .map_err(|_| invalid(format!("Invalid HTTP method {:?}", args.method)))?;
    let mut options = RequestOptions::new(method);

    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        options = options.header(name, value);
    }

    if let Some(json) = &args.json {
        let payload: Value = serde_json::from_str(json)?;
        options = options.json(&payload)?;
    }

    if !args.fields.is_empty() {
        options = options.body(RawBody::Object(parse_fields(&args.fields)?));
    } else if let Some(data) = &args.data {
        options = options.body(RawBody::Text(data.clone()));
    } else if let Some(path) = &args.data_file {
        options = options.body(RawBody::Bytes(std::fs::read(path)?));
    }

    Ok(options)
}

/// Request path with a leading slash
fn request_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Run the api command
pub async fn run(opts: &GlobalOptions, args: &ApiArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let options = build_request(args)?;

    let value = ctx
        .client
        .api()
        .fetch_value(&request_path(&args.path), options)
        .await?;
    println!("{}", format_json_value(&value)?);
    Ok(())
}
