//! Top-level user list fetch.

use tracing::{debug, info, warn};

use crate::source::UserSource;
use crate::user::User;

/// Fetches the user list once, absorbing every failure.
///
/// Resolves to the users on success. A non-success status, a transport
/// failure, an undecodable body, or a body of the wrong shape all resolve to
/// `None`; errors are logged with their kind first.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use user_directory::{FetchError, User, UserSource, fetch_users};
///
/// struct Unreachable;
///
/// #[async_trait]
/// impl UserSource for Unreachable {
///     async fn get_users(&self) -> Result<Option<Vec<User>>, FetchError> {
///         Err(FetchError::transport("connection refused"))
///     }
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// assert_eq!(fetch_users(&Unreachable).await, None);
/// # });
/// ```
pub async fn fetch_users<S: UserSource + ?Sized>(source: &S) -> Option<Vec<User>> {
    match source.get_users().await {
        Ok(Some(users)) => {
            info!(count = users.len(), "fetched user list");
            debug!(?users, "user list");
            Some(users)
        }
        Ok(None) => None,
        Err(error) => {
            warn!(kind = error.kind(), error = %error, "user list fetch failed");
            None
        }
    }
}
