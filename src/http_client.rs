use crate::{error::RemoteError, types::ApiResponse};
use anyhow::{Context, Result};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Error body as sent by the auth server
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default, alias = "error_description", alias = "errorMessage")]
    message: Option<String>,
}

/// Create the HTTP client used to talk to the auth server
///
/// # Arguments
/// * `timeout` - Upper bound for a whole request (connect, send, receive)
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to create auth server HTTP client")
}

/// Handle HTTP response by checking status and decoding the body
///
/// # Arguments
/// * `res` - The HTTP response to handle
/// * `action` - Human readable name of the request (e.g., "Logout")
///
/// # Returns
/// * `Ok(ApiResponse)` - The decoded success payload
/// * `Err(RemoteError)` - If the status is not successful or reading the body fails
pub async fn handle_http_response(res: Response, action: &str) -> Result<ApiResponse, RemoteError> {
    let status = res.status();
    let body = res.text().await.map_err(|e| RemoteError::InvalidResponse {
        action: action.to_string(),
        reason: format!("failed to read response body: {e}"),
    })?;

    interpret_response(action, status, &body)
}

/// Map a status and body to the success payload or a rejection
pub fn interpret_response(
    action: &str,
    status: StatusCode,
    body: &str,
) -> Result<ApiResponse, RemoteError> {
    if !status.is_success() {
        let (code, message) = extract_error_message(action, status, body);
        return Err(RemoteError::Rejected {
            action: action.to_string(),
            status: status.as_u16(),
            code,
            message,
        });
    }

    parse_success_body(body)
}

/// Decode a success body
///
/// Empty bodies yield an empty payload, plain text bodies end up as `message`.
pub fn parse_success_body(body: &str) -> Result<ApiResponse, RemoteError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(ApiResponse::default());
    }

    match serde_json::from_str::<ApiResponse>(trimmed) {
        Ok(response) => Ok(response),
        Err(_) => Ok(ApiResponse {
            message: Some(trimmed.to_string()),
            ..Default::default()
        }),
    }
}

/// Extract the server error code and message from an error response
pub fn extract_error_message(
    action: &str,
    status: StatusCode,
    body: &str,
) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, format!("{action} failed: HTTP {status} (Empty body)"));
    }

    match serde_json::from_str::<ErrorBody>(trimmed) {
        Ok(ErrorBody {
            code,
            message: Some(message),
        }) => (code, message),
        Ok(ErrorBody {
            code,
            message: None,
        }) => (code, format!("{action} failed: HTTP {status}")),
        Err(_) => (None, trimmed.to_string()),
    }
}

/// Convert a transport level reqwest error
pub fn transport_error(action: &str, error: reqwest::Error) -> RemoteError {
    let reason = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("failed to connect: {error}")
    } else {
        error.to_string()
    };

    RemoteError::Transport {
        action: action.to_string(),
        reason,
    }
}
