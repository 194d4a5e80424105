//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Envelope printed for `--format json`
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the output was produced (RFC 3339)
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,

    /// Number of items, for list output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Metadata {
    fn now(count: Option<usize>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            count,
        }
    }
}

/// Format a list as pretty-printed JSON with a count
pub fn format_json<T: Serialize>(items: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data: items,
        meta: Metadata::now(Some(items.len())),
    })
}

/// Format a single value as pretty-printed JSON
pub fn format_json_value<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput {
        data: value,
        meta: Metadata::now(None),
    })
}
