//! Identifier handling
//!
//! The gateway renders 64-bit ids as JSON strings and some ids as plain
//! strings, so response ids are accepted in either form and kept as `String`.
//! A few request payloads need real integers; [`parse_numeric_id`] is the one
//! place that conversion happens.

use serde::{Deserialize, Deserializer};

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Deserialize an id given as either a JSON string or number
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Convert a user-supplied id into the integer some endpoints expect.
///
/// Surrounding whitespace is ignored; anything else that is not a base-10
/// integer is rejected before a request is made.
pub fn parse_numeric_id(id: &str) -> Result<i64, ApiError> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidId(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
    }

    #[test]
    fn test_id_accepts_string_and_number() {
        let h: Holder = serde_json::from_str(r#"{"id": "42"}"#).unwrap();
        assert_eq!(h.id, "42");

        let h: Holder = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(h.id, "42");
    }

    #[test]
    fn test_id_rejects_other_types() {
        assert!(serde_json::from_str::<Holder>(r#"{"id": true}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"id": null}"#).is_err());
    }

    #[test]
    fn test_parse_numeric_id() {
        assert_eq!(parse_numeric_id("42").unwrap(), 42);
        assert_eq!(parse_numeric_id(" 7 ").unwrap(), 7);
        assert!(matches!(
            parse_numeric_id("abc"),
            Err(ApiError::InvalidId(id)) if id == "abc"
        ));
        assert!(parse_numeric_id("12abc").is_err());
        assert!(parse_numeric_id("").is_err());
    }
}
