//! Error taxonomy for the account flows
//!
//! Validation errors are raised locally before any request is built, remote
//! errors are produced by the auth server client and handed back to the caller
//! unchanged.

use thiserror::Error;

/// A password complexity rule that was not met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("password must be at least {min} characters long")]
    TooShort { min: usize },
    #[error("password must contain a lower case character")]
    MissingLowercase,
    #[error("password must contain an upper case character")]
    MissingUppercase,
    #[error("password must contain a numeric character")]
    MissingDigit,
    #[error("password must contain a special character")]
    MissingSpecial,
}

/// Local input error, blocks submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: String },
    #[error("invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
    #[error(transparent)]
    Policy(#[from] PolicyViolation),
    #[error("new password and confirmation do not match")]
    ConfirmationMismatch,
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        Self::Required {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Failure reported by the auth server client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request never produced a response (connect, timeout, TLS)
    #[error("{action} failed: {reason}")]
    Transport { action: String, reason: String },

    /// The server answered with a non-success status
    #[error("{action} failed: HTTP {status}: {message}")]
    Rejected {
        action: String,
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The server answered with success but the body was unusable
    #[error("{action}: invalid response: {reason}")]
    InvalidResponse { action: String, reason: String },
}

impl RemoteError {
    /// Server supplied error code, if the server sent one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Rejected { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_violation_converts_into_validation_error() {
        let err: ValidationError = PolicyViolation::MissingDigit.into();
        assert_eq!(err, ValidationError::Policy(PolicyViolation::MissingDigit));
        assert_eq!(err.to_string(), "password must contain a numeric character");
    }

    #[test]
    fn required_names_the_field() {
        let err = ValidationError::required("Temporary Password");
        assert_eq!(err.to_string(), "Temporary Password is required");
    }

    #[test]
    fn rejected_exposes_code() {
        let err = RemoteError::Rejected {
            action: "Logout".to_string(),
            status: 400,
            code: Some("EC_0001".to_string()),
            message: "bad request".to_string(),
        };
        assert_eq!(err.code(), Some("EC_0001"));
        assert_eq!(err.to_string(), "Logout failed: HTTP 400: bad request");
    }

    #[test]
    fn transport_has_no_code() {
        let err = RemoteError::Transport {
            action: "Forgot password".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(err.code(), None);
    }
}
