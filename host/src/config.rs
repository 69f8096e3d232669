//! Host configuration loaded via OrthoConfig.

use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use user_directory::DEFAULT_USERS_ENDPOINT;

/// Configuration values for the component host.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP_HOST")]
pub struct HostSettings {
    /// Override for the user directory endpoint.
    pub users_endpoint: Option<String>,
    /// Whole-request timeout for the user list fetch, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl HostSettings {
    /// Return the configured users endpoint, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns an error when the configured endpoint is not a URL.
    pub fn users_endpoint(&self) -> Result<Url> {
        let raw = self
            .users_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_USERS_ENDPOINT);
        Url::parse(raw).wrap_err_with(|| format!("invalid users endpoint '{raw}'"))
    }

    /// Return the configured request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for host configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> HostSettings {
        HostSettings::load_from_iter([OsString::from("component-host")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("SIGNUP_HOST_USERS_ENDPOINT", None::<String>),
            ("SIGNUP_HOST_REQUEST_TIMEOUT_SECS", None::<String>),
            ("SIGNUP_HOST_LOG_JSON", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert!(!settings.log_json);
        assert!(settings.request_timeout().is_none());
        assert_eq!(
            settings.users_endpoint().expect("default endpoint parses").as_str(),
            DEFAULT_USERS_ENDPOINT
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "SIGNUP_HOST_USERS_ENDPOINT",
                Some("http://127.0.0.1:8080/users".to_owned()),
            ),
            ("SIGNUP_HOST_REQUEST_TIMEOUT_SECS", Some("3".to_owned())),
            ("SIGNUP_HOST_LOG_JSON", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert!(settings.log_json);
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(
            settings.users_endpoint().expect("override parses").as_str(),
            "http://127.0.0.1:8080/users"
        );
    }

    #[rstest]
    fn invalid_endpoint_is_reported() {
        let settings = HostSettings {
            users_endpoint: Some("not a url".to_owned()),
            request_timeout_secs: None,
            log_json: false,
        };

        let error = settings.users_endpoint().expect_err("endpoint should fail");
        assert!(error.to_string().contains("not a url"));
    }
}
