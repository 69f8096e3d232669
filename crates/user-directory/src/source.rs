//! Port for reading the user list from the directory.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::user::User;

/// Source of the directory's user list.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Requests the user list once.
    ///
    /// Resolves to `Ok(None)` when the directory answers with a non-success
    /// status; that outcome is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the request fails in transport, the body
    /// is not JSON, or the JSON is not an array of users.
    async fn get_users(&self) -> Result<Option<Vec<User>>, FetchError>;
}
