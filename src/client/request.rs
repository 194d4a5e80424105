//! HTTP request wrapper
//!
//! Every gateway call goes through [`ApiClient::fetch`]: it attaches the stored
//! credential, serializes the body, performs exactly one request and turns the
//! response into either a typed value or an [`ApiError`].

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as HttpClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::auth::AuthStore;
use crate::error::{ApiError, Result};

/// Body supplied as-is by the caller
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    /// Plain key-value object; sent as JSON
    Object(Map<String, Value>),
    /// Binary payload such as a file upload; sent untouched
    Bytes(Vec<u8>),
    /// Preformatted text; sent untouched
    Text(String),
}

/// Options for a single request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// Raw body, ignored when `json` is set
    pub body: Option<RawBody>,
    /// Structured payload, always sent as JSON
    pub json: Option<Value>,
    /// Extra headers; a stored credential overrides `Authorization`
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            json: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    /// Attach a structured payload
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self> {
        self.json = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Attach a raw body
    pub fn body(mut self, body: RawBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header, replacing an earlier one with the same name
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A request after header merging and body resolution
#[derive(Debug)]
pub(crate) struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

/// Thin client over `reqwest` bound to one gateway and one credential store
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    auth: AuthStore,
}

impl ApiClient {
    /// Create a client for `base_url`. Without a timeout, requests wait as
    /// long as the transport does.
    pub fn new(base_url: &str, auth: AuthStore, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform a request and decode the JSON response into `T`.
    ///
    /// Non-2xx responses fail with [`ApiError::Http`]; an unparseable body on
    /// any response is treated as an empty JSON object.
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        let value = self.fetch_value(path, options).await?;
        serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Unexpected response from {}: {}", path, e)).into()
        })
    }

    /// Like [`fetch`](Self::fetch), returning the parsed JSON untyped
    pub async fn fetch_value(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let prepared = self.prepare(path, options)?;
        log::debug!("{} {}", prepared.method, prepared.url);

        let mut request = self
            .http
            .request(prepared.method, &prepared.url)
            .headers(prepared.headers);
        if let Some(body) = prepared.body {
            request = request.body(body);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::from)?;
        log::debug!("{} {} -> {}", path, status, text.len());

        Ok(check_status(status, parse_body(&text))?)
    }

    pub(crate) fn prepare(&self, path: &str, options: RequestOptions) -> Result<PreparedRequest> {
        let RequestOptions {
            method,
            body,
            json,
            mut headers,
        } = options;

        for (name, value) in self.auth.auth_header().iter() {
            headers.insert(name.clone(), value.clone());
        }

        let body = match (json, body) {
            (Some(payload), _) => Some(json_body(&payload, &mut headers)?),
            (None, Some(RawBody::Object(map))) => Some(json_body(&map, &mut headers)?),
            (None, Some(RawBody::Bytes(bytes))) => Some(bytes),
            (None, Some(RawBody::Text(text))) => Some(text.into_bytes()),
            (None, None) => None,
        };

        Ok(PreparedRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        })
    }
}

fn json_body<T: Serialize + ?Sized>(payload: &T, headers: &mut HeaderMap) -> Result<Vec<u8>> {
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(serde_json::to_vec(payload)?)
}

/// Parse a response body, degrading to `{}` when it is empty or not JSON
pub(crate) fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Object(Map::new());
    }
    serde_json::from_str(text).unwrap_or_else(|e| {
        log::debug!("Response body is not JSON ({}), treating as empty", e);
        Value::Object(Map::new())
    })
}

/// Map a non-2xx status to an error carrying the backend's message
pub(crate) fn check_status(status: StatusCode, data: Value) -> std::result::Result<Value, ApiError> {
    if status.is_success() {
        return Ok(data);
    }

    let message = data
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string);

    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}
