//! Reqwest-backed user directory source.
//!
//! This adapter owns transport details only: the GET request, status
//! handling, and handing the body to [`parse_users`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::FetchError;
use crate::schema::parse_users;
use crate::source::UserSource;
use crate::user::User;

/// Endpoint serving the user list.
pub const DEFAULT_USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

const DEFAULT_USER_AGENT: &str = "signup-kit-user-directory/0.1";

/// Client settings for [`UserHttpSource`].
#[derive(Debug, Clone)]
pub struct UserHttpOptions {
    /// HTTP user-agent sent with the request.
    pub user_agent: String,
    /// Whole-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for UserHttpOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: None,
        }
    }
}

/// User source that performs one HTTP GET against one endpoint.
#[derive(Debug, Clone)]
pub struct UserHttpSource {
    client: Client,
    endpoint: Url,
    user_agent: String,
}

impl UserHttpSource {
    /// Builds a source with default client settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_options(endpoint, UserHttpOptions::default())
    }

    /// Builds a source with explicit client settings.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_options(endpoint: Url, options: UserHttpOptions) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
            user_agent: options.user_agent,
        })
    }

    /// Endpoint the source requests.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserSource for UserHttpSource {
    async fn get_users(&self) -> Result<Option<Vec<User>>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "user directory answered without success"
            );
            return Ok(None);
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_users(body.as_ref()).map(Some)
    }
}

fn map_transport_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::transport(format!("timed out: {error}"))
    } else {
        FetchError::transport(error.to_string())
    }
}
