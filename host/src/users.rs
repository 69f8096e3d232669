//! `users` command: mount the user list and wait for its fetch.

use std::io::Write;
use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use user_directory::{UserHttpOptions, UserHttpSource, UserList};

use crate::cli::UsersArgs;
use crate::config::HostSettings;

/// Mounts the user list against the resolved endpoint and renders it.
///
/// The host waits for the fetch to settle before returning so its log lines
/// are emitted; the users themselves are not rendered.
///
/// # Errors
///
/// Returns an error when the endpoint is invalid, the HTTP client cannot be
/// built, or writing to `out` fails. Fetch failures are not errors.
pub async fn run(settings: &HostSettings, args: UsersArgs, out: &mut impl Write) -> Result<()> {
    let endpoint = match args.endpoint {
        Some(endpoint) => endpoint,
        None => settings.users_endpoint()?,
    };
    let options = UserHttpOptions {
        timeout: args
            .timeout_secs
            .map(std::time::Duration::from_secs)
            .or_else(|| settings.request_timeout()),
        ..UserHttpOptions::default()
    };
    let source =
        UserHttpSource::with_options(endpoint, options).wrap_err("failed to build HTTP client")?;
    info!(endpoint = %source.endpoint(), "mounting user list");

    let list = UserList::mount(Arc::new(source));
    writeln!(out, "{}", list.render())?;

    let settled = list.settled().await;
    info!(
        fetched = settled.is_some(),
        count = settled.as_ref().map_or(0, Vec::len),
        "user list settled"
    );
    Ok(())
}
