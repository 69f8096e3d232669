//! Errors raised while fetching the user list.
//!
//! None of these reach callers of [`crate::fetch_users`]; they are logged and
//! the fetch resolves to nothing.

use thiserror::Error;

/// Failure of one user list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request failed before a response arrived, or while reading it.
    #[error("user directory transport failed: {message}")]
    Transport {
        /// Description of the failure.
        message: String,
    },

    /// The response body is not JSON.
    #[error("user directory response decode failed: {message}")]
    Decode {
        /// Description of the failure.
        message: String,
    },

    /// The response body is JSON but not an array of users.
    #[error("user directory response does not match the user schema: {message}")]
    Schema {
        /// Description of the mismatch.
        message: String,
    },
}

impl FetchError {
    /// Builds a [`FetchError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Builds a [`FetchError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Builds a [`FetchError::Schema`].
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    /// Short label for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
            Self::Schema { .. } => "schema",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(FetchError::transport("connection refused"), "transport", "user directory transport failed: connection refused")]
    #[case(FetchError::decode("expected value"), "decode", "user directory response decode failed: expected value")]
    #[case(FetchError::schema("missing field `email`"), "schema", "user directory response does not match the user schema: missing field `email`")]
    fn errors_format_with_kind(
        #[case] error: FetchError,
        #[case] kind: &str,
        #[case] message: &str,
    ) {
        assert_eq!(error.kind(), kind);
        assert_eq!(error.to_string(), message);
    }
}
