use crate::services::auth::password_policy::DEFAULT_MIN_LENGTH;
use anyhow::{Context, Result};
use std::{env, time::Duration};

/// Application configuration loaded and validated at startup
///
/// Library types take the values they need explicitly; only the binary
/// reads the environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Auth server connection
    pub auth_server: AuthServerConfig,

    /// Identity of this client application towards the auth server
    pub app: AppIdentityConfig,

    /// Navigation targets
    pub navigation: NavigationConfig,

    /// Password complexity settings
    pub password: PasswordConfig,
}

#[derive(Clone, Debug)]
pub struct AuthServerConfig {
    pub url: String,
    pub request_timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct AppIdentityConfig {
    pub app_id: String,
}

#[derive(Clone, Debug)]
pub struct NavigationConfig {
    pub post_password_change_route: String,
}

#[derive(Clone, Debug)]
pub struct PasswordConfig {
    pub min_length: usize,
}

impl AppConfig {
    /// Load all configuration from environment variables
    pub fn load() -> Result<Self> {
        Ok(Self {
            auth_server: AuthServerConfig::load()?,
            app: AppIdentityConfig::load()?,
            navigation: NavigationConfig::load()?,
            password: PasswordConfig::load()?,
        })
    }
}

impl AuthServerConfig {
    const DEFAULT_URL: &str = "http://127.0.0.1:8080/auth-server";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    fn load() -> Result<Self> {
        let url = env::var("AUTH_SERVER_URL").unwrap_or_else(|_| Self::DEFAULT_URL.to_string());
        let request_timeout = parse_timeout(env::var("AUTH_REQUEST_TIMEOUT_SECS").ok())?;

        Ok(Self {
            url,
            request_timeout,
        })
    }
}

impl Default for AuthServerConfig {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT_URL.to_string(),
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl AppIdentityConfig {
    fn load() -> Result<Self> {
        let app_id = env::var("APP_ID").unwrap_or_else(|_| "STUDYAPP".to_string());
        anyhow::ensure!(!app_id.trim().is_empty(), "failed to load APP_ID: empty");

        Ok(Self { app_id })
    }
}

impl NavigationConfig {
    fn load() -> Result<Self> {
        let post_password_change_route = env::var("POST_PASSWORD_CHANGE_ROUTE")
            .unwrap_or_else(|_| "/coordinator/studies/sites".to_string());

        Ok(Self {
            post_password_change_route,
        })
    }
}

impl PasswordConfig {
    fn load() -> Result<Self> {
        let min_length = parse_min_length(env::var("PASSWORD_MIN_LENGTH").ok())?;

        Ok(Self { min_length })
    }
}

fn parse_min_length(value: Option<String>) -> Result<usize> {
    let Some(value) = value else {
        return Ok(DEFAULT_MIN_LENGTH);
    };

    let min_length = value
        .trim()
        .parse::<usize>()
        .context("failed to parse PASSWORD_MIN_LENGTH: invalid format")?;

    anyhow::ensure!(
        min_length >= DEFAULT_MIN_LENGTH,
        "failed to parse PASSWORD_MIN_LENGTH: must be at least {DEFAULT_MIN_LENGTH}"
    );

    Ok(min_length)
}

fn parse_timeout(value: Option<String>) -> Result<Duration> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(AuthServerConfig::DEFAULT_TIMEOUT_SECS));
    };

    let secs = value
        .trim()
        .parse::<u64>()
        .context("failed to parse AUTH_REQUEST_TIMEOUT_SECS: invalid format")?;

    anyhow::ensure!(
        secs > 0,
        "failed to parse AUTH_REQUEST_TIMEOUT_SECS: must be positive"
    );

    Ok(Duration::from_secs(secs))
}
