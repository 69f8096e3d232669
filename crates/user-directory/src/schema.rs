//! Response body decoding and user schema validation.
//!
//! Decoding happens in two passes: bytes to JSON, then JSON to users. A body
//! that is not JSON is a decode failure; JSON of the wrong shape is a schema
//! failure naming the offending array index.

use serde::Deserialize;
use serde_json::Value;

use crate::error::FetchError;
use crate::user::User;

/// Parses a response body into users.
///
/// Fields the schema does not name are ignored.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when `body` is not JSON and
/// [`FetchError::Schema`] when it is not an array of users.
///
/// # Examples
///
/// ```
/// use user_directory::{FetchError, parse_users};
///
/// assert_eq!(parse_users(b"[]"), Ok(Vec::new()));
/// assert!(matches!(parse_users(b"{}"), Err(FetchError::Schema { .. })));
/// assert!(matches!(parse_users(b"<html>"), Err(FetchError::Decode { .. })));
/// ```
pub fn parse_users(body: &[u8]) -> Result<Vec<User>, FetchError> {
    let decoded: Value = serde_json::from_slice(body)
        .map_err(|error| FetchError::decode(format!("invalid JSON payload: {error}")))?;

    let items = match decoded {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::schema(format!(
                "expected an array of users, found {}",
                json_kind(&other)
            )));
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            User::deserialize(item)
                .map_err(|error| FetchError::schema(format!("user at index {index}: {error}")))
        })
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
