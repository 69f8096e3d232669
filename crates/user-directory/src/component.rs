//! User list component lifecycle.
//!
//! Mounting starts the single fetch on the Tokio runtime. Rendering never
//! depends on its outcome. Unmounting detaches the fetch: it still runs to
//! completion and logs, and its result is dropped.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::fetch::fetch_users;
use crate::source::UserSource;
use crate::user::User;

/// Text the user list renders, whatever the fetch outcome.
pub const USER_LIST_PLACEHOLDER: &str = "Users....";

/// A mounted user list.
#[derive(Debug)]
pub struct UserList {
    fetch: JoinHandle<Option<Vec<User>>>,
}

impl UserList {
    /// Mounts the list, starting its one fetch.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    #[must_use]
    pub fn mount(source: Arc<dyn UserSource>) -> Self {
        let fetch = tokio::spawn(async move { fetch_users(source.as_ref()).await });
        Self { fetch }
    }

    /// Rendered output.
    #[must_use]
    pub const fn render(&self) -> &'static str {
        USER_LIST_PLACEHOLDER
    }

    /// Unmounts the list without waiting for the fetch.
    pub fn unmount(self) {
        drop(self.fetch);
    }

    /// Waits for the fetch to finish and returns what it resolved to.
    pub async fn settled(self) -> Option<Vec<User>> {
        match self.fetch.await {
            Ok(users) => users,
            Err(error) => {
                warn!(error = %error, "user list fetch task did not complete");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::{Notify, oneshot};

    use super::*;
    use crate::error::FetchError;
    use crate::source::MockUserSource;

    #[tokio::test]
    async fn mount_fetches_once_and_renders_placeholder() {
        let mut source = MockUserSource::new();
        source.expect_get_users().times(1).returning(|| Ok(Some(Vec::new())));

        let list = UserList::mount(Arc::new(source));

        assert_eq!(list.render(), "Users....");
        assert_eq!(list.settled().await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn failed_fetch_still_renders_placeholder() {
        let mut source = MockUserSource::new();
        source
            .expect_get_users()
            .times(1)
            .returning(|| Err(FetchError::schema("expected an array of users, found null")));

        let list = UserList::mount(Arc::new(source));

        assert_eq!(list.render(), USER_LIST_PLACEHOLDER);
        assert_eq!(list.settled().await, None);
    }

    struct GatedSource {
        gate: Arc<Notify>,
        finished: Mutex<Option<oneshot::Sender<()>>>,
    }

    #[async_trait]
    impl UserSource for GatedSource {
        async fn get_users(&self) -> Result<Option<Vec<User>>, FetchError> {
            self.gate.notified().await;
            let finished = self.finished.lock().ok().and_then(|mut slot| slot.take());
            if let Some(sender) = finished {
                sender.send(()).unwrap_or_default();
            }
            Ok(None)
        }
    }

    #[tokio::test]
    async fn unmounted_fetch_runs_to_completion() {
        let gate = Arc::new(Notify::new());
        let (finished_tx, finished_rx) = oneshot::channel();
        let source = GatedSource {
            gate: Arc::clone(&gate),
            finished: Mutex::new(Some(finished_tx)),
        };

        let list = UserList::mount(Arc::new(source));
        list.unmount();
        gate.notify_one();

        finished_rx.await.expect("detached fetch should finish");
    }
}
