//! One-shot user list fetching for the user list component.
//!
//! The component fetches the directory's users once per mount, checks the
//! response against the user schema, logs the outcome, and renders a static
//! placeholder. Failures never reach the caller: [`fetch_users`] resolves to
//! `None` instead.
//!
//! # Overview
//!
//! - [`UserSource`] is the port; [`UserHttpSource`] implements it with reqwest
//! - [`parse_users`] decodes a body and validates its shape
//! - [`fetch_users`] is the total operation that absorbs every [`FetchError`]
//! - [`UserList`] ties one fetch to one mount
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use reqwest::Url;
//! use user_directory::{DEFAULT_USERS_ENDPOINT, UserHttpSource, UserList};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let source = UserHttpSource::new(Url::parse(DEFAULT_USERS_ENDPOINT)?)?;
//! let list = UserList::mount(Arc::new(source));
//! println!("{}", list.render());
//! let users = list.settled().await;
//! # drop(users);
//! # Ok(())
//! # }
//! ```

mod component;
mod error;
mod fetch;
mod http_source;
mod schema;
mod source;
mod user;

pub use component::{USER_LIST_PLACEHOLDER, UserList};
pub use error::FetchError;
pub use fetch::fetch_users;
pub use http_source::{DEFAULT_USERS_ENDPOINT, UserHttpOptions, UserHttpSource};
pub use schema::parse_users;
pub use source::UserSource;
pub use user::{Address, Company, Geo, User};
