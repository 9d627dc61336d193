//! Command line front end for the account flows
//!
//! Usage:
//!   account-client forgot-password <email>
//!   account-client logout
//!   account-client change-password <current> <new> <confirm> [--setup]

use account_client::{
    AccountApi, ChangePasswordForm, ChangePasswordMode, CompletionSignal, HttpAuthClient,
    LogNavigator, LogNotifier, Session, SessionData, config::AppConfig,
};
use anyhow::{Context, Result, bail};
use env_logger::{Builder, Env, Target};
use log::{debug, error, info};
use std::{env, io::Write};

const USAGE: &str = "usage: account-client forgot-password <email> | logout | change-password <current> <new> <confirm> [--setup]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    ForgotPassword { email: String },
    Logout,
    ChangePassword(ChangePasswordForm),
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        match args {
            [cmd, email] if cmd == "forgot-password" => Ok(Self::ForgotPassword {
                email: email.clone(),
            }),
            [cmd] if cmd == "logout" => Ok(Self::Logout),
            [cmd, current, new, confirm, rest @ ..] if cmd == "change-password" => {
                let mode = match rest {
                    [] => ChangePasswordMode::Change,
                    [flag] if flag == "--setup" => ChangePasswordMode::Setup,
                    _ => bail!("{USAGE}"),
                };
                Ok(Self::ChangePassword(
                    ChangePasswordForm::new(current.as_str(), new.as_str(), confirm.as_str())
                        .with_mode(mode),
                ))
            }
            _ => bail!("{USAGE}"),
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = AppConfig::load().context("failed to load configuration")?;
    let auth_client =
        HttpAuthClient::new(&config.auth_server).context("failed to create auth client")?;
    let api = AccountApi::new(auth_client, LogNavigator, LogNotifier, &config);

    let signal = match command {
        Command::ForgotPassword { email } => api.forgot_password(&email).await?,
        Command::Logout => {
            let session = match env::var("ACCOUNT_USER_ID") {
                Ok(user_id) if !user_id.is_empty() => Session::signed_in(SessionData::new(user_id)),
                _ => Session::new(),
            };
            api.logout(&session).await
        }
        Command::ChangePassword(form) => {
            info!("{}", form.mode.title());
            debug!(
                "{}: {}",
                form.mode.current_password_label(),
                form.mode.current_password_hint()
            );
            info!("{}", api.requests.policy().description());
            api.change_password(&form).await?
        }
    };

    finish(signal)
}

fn finish(signal: CompletionSignal) -> Result<()> {
    match signal.error {
        Some(e) => Err(e).context("request failed"),
        None if signal.success => Ok(()),
        None => bail!("request failed"),
    }
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    builder.format(|f, record| match record.level() {
        log::Level::Error => {
            eprintln!("{}", record.args());
            Ok(())
        }
        _ => {
            writeln!(f, "{}", record.args())
        }
    });

    builder.target(Target::Stdout).init();

    info!("account-client version: {}", env!("CARGO_PKG_VERSION"));
}
