use crate::error::RemoteError;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;
use std::fmt;

/// Request to send a password reset email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    #[validate(min_length = 1)]
    #[validate(pattern = r"^[^@\s]+@[^@\s]+\.[^@\s]+$")]
    pub email: String,
    #[validate(min_length = 1)]
    pub app_id: String,
}

/// Request to end the server side session of a user
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub user_id: String,
}

/// Request to replace the password of the signed in user
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(min_length = 1)]
    pub current_password: String,
    #[validate(min_length = 1)]
    pub new_password: String,
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("current_password", &"***")
            .field("new_password", &"***")
            .finish()
    }
}

/// Success payload of the auth server
///
/// Mirrors the server's message code serialization (`status`, `code`,
/// `message`). All fields are optional since some endpoints answer with an
/// empty body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of a single remote call, consumed once by the result handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub success: bool,
    pub code: Option<String>,
    pub error: Option<RemoteError>,
}

impl OperationResult {
    pub fn succeeded(code: Option<String>) -> Self {
        Self {
            success: true,
            code,
            error: None,
        }
    }

    pub fn failed(error: RemoteError) -> Self {
        Self {
            success: false,
            code: None,
            error: Some(error),
        }
    }
}

impl From<Result<ApiResponse, RemoteError>> for OperationResult {
    fn from(result: Result<ApiResponse, RemoteError>) -> Self {
        match result {
            Ok(response) => Self::succeeded(response.code),
            Err(e) => Self::failed(e),
        }
    }
}

/// Per call lifecycle: `Idle -> Submitted -> {Succeeded, Failed}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OperationState {
    #[default]
    Idle,
    Submitted,
    Succeeded,
    Failed,
}

impl OperationState {
    /// Move an idle call to submitted; any other state is kept
    pub fn submit(self) -> Self {
        match self {
            Self::Idle => Self::Submitted,
            other => other,
        }
    }

    /// Finish a submitted call; idle and terminal states are kept
    pub fn complete(self, success: bool) -> Self {
        match self {
            Self::Submitted if success => Self::Succeeded,
            Self::Submitted => Self::Failed,
            other => other,
        }
    }
}

/// The `(success, error)` pair handed back to whoever triggered an operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSignal {
    pub success: bool,
    pub error: Option<RemoteError>,
}

impl CompletionSignal {
    pub fn state(&self) -> OperationState {
        OperationState::Submitted.complete(self.success)
    }
}

impl From<OperationResult> for CompletionSignal {
    fn from(result: OperationResult) -> Self {
        Self {
            success: result.success,
            error: result.error,
        }
    }
}
