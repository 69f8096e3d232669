//! Command-line surface of the component host.

use clap::{Args, Parser, Subcommand};
use registration_form::RawFormFields;
use reqwest::Url;

/// `component-host` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "component-host",
    about = "Drive the registration form and user list components from a terminal",
    version
)]
pub struct Cli {
    /// Component to drive.
    #[command(subcommand)]
    pub command: Command,
}

/// Components the host can drive.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Submit the registration form once with the given field values.
    Register(RegisterArgs),
    /// Mount the user list, render it, and wait for its fetch to settle.
    Users(UsersArgs),
}

/// Registration form field values. Omitted fields are submitted empty.
#[derive(Debug, Clone, Default, Args)]
pub struct RegisterArgs {
    /// Full name.
    #[arg(long, default_value = "")]
    pub name: String,
    /// Email address.
    #[arg(long, default_value = "")]
    pub email: String,
    /// Phone number.
    #[arg(long, default_value = "")]
    pub phone: String,
    /// Gender option value (`female`, `male` or `other`).
    #[arg(long, default_value = "")]
    pub gender: String,
    /// Password.
    #[arg(long, default_value = "")]
    pub password: String,
    /// Password confirmation.
    #[arg(long, default_value = "")]
    pub confirm: String,
}

impl From<RegisterArgs> for RawFormFields {
    fn from(args: RegisterArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            gender: args.gender,
            password: args.password,
            confirm: args.confirm,
        }
    }
}

/// User list options; each overrides the matching setting.
#[derive(Debug, Clone, Default, Args)]
pub struct UsersArgs {
    /// Users endpoint.
    #[arg(long, value_name = "url")]
    pub endpoint: Option<Url>,
    /// Whole-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "seconds")]
    pub timeout_secs: Option<u64>,
}

#[cfg(test)]
mod tests {
    //! Unit tests for argument parsing.

    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn register_collects_form_fields() {
        let cli = Cli::try_parse_from([
            "component-host",
            "register",
            "--name",
            "John Doe",
            "--gender",
            "other",
            "--confirm",
            "secret1",
        ])
        .expect("arguments parse");

        let Command::Register(args) = cli.command else {
            panic!("expected the register command");
        };
        let fields = RawFormFields::from(args);
        assert_eq!(fields.name, "John Doe");
        assert_eq!(fields.gender, "other");
        assert_eq!(fields.confirm, "secret1");
        assert!(fields.password.is_empty());
    }

    #[rstest]
    fn users_accepts_endpoint_and_timeout() {
        let cli = Cli::try_parse_from([
            "component-host",
            "users",
            "--endpoint",
            "http://127.0.0.1:9000/users",
            "--timeout-secs",
            "2",
        ])
        .expect("arguments parse");

        let Command::Users(args) = cli.command else {
            panic!("expected the users command");
        };
        assert_eq!(
            args.endpoint.map(String::from).as_deref(),
            Some("http://127.0.0.1:9000/users")
        );
        assert_eq!(args.timeout_secs, Some(2));
    }

    #[rstest]
    fn users_rejects_malformed_endpoint() {
        let result = Cli::try_parse_from(["component-host", "users", "--endpoint", "nope"]);
        assert!(result.is_err());
    }
}
