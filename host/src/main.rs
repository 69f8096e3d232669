//! Command-line host for the registration form and user list components.
//!
//! Stands in for a rendering host: `register` plays one form submit and
//! `users` mounts the user list. Settings come from `SIGNUP_HOST_*`
//! environment variables; command-line flags override them.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use registration_form::FormState;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

mod cli;
mod config;
mod register;
mod users;

use cli::{Cli, Command};
use config::HostSettings;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let settings = HostSettings::load_from_iter([OsString::from(env!("CARGO_PKG_NAME"))])
        .map_err(|error| eyre!("failed to load host settings: {error}"))?;
    init_tracing(settings.log_json);

    let mut out = io::stdout().lock();
    let code = match cli.command {
        Command::Register(args) => {
            let mut form = FormState::new();
            if register::run(&mut form, &args.into(), &mut out)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Command::Users(args) => {
            let runtime = Builder::new_current_thread()
                .enable_all()
                .build()
                .wrap_err("failed to build Tokio runtime")?;
            runtime.block_on(users::run(&settings, args, &mut out))?;
            ExitCode::SUCCESS
        }
    };
    out.flush()?;
    Ok(code)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
