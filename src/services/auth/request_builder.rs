//! Request construction
//!
//! Turns raw user input into validated requests. Nothing here touches the
//! network; a returned error means no request exists.

use crate::{
    error::ValidationError,
    services::auth::password_policy::PasswordPolicy,
    session::Session,
    types::{ChangePasswordRequest, ForgotPasswordRequest, LogoutRequest},
};
use log::debug;
use serde_valid::Validate;

/// Route action that opens the change password form in setup mode
const PASSWORD_SETUP_ACTION: &str = "passwordsetup";

/// Whether the user changes a known password or replaces a temporary one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChangePasswordMode {
    #[default]
    Change,
    Setup,
}

impl ChangePasswordMode {
    /// Select the mode from the `action` route parameter
    pub fn from_action(action: Option<&str>) -> Self {
        match action {
            Some(PASSWORD_SETUP_ACTION) => Self::Setup,
            _ => Self::Change,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Change => "Change Password",
            Self::Setup => "SET UP PASSWORD",
        }
    }

    pub fn current_password_label(self) -> &'static str {
        match self {
            Self::Change => "Current Password",
            Self::Setup => "Temporary Password",
        }
    }

    pub fn current_password_hint(self) -> &'static str {
        match self {
            Self::Change => "Enter your current password",
            Self::Setup => "Enter your temporary password",
        }
    }
}

/// Raw input of the change password form
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub mode: ChangePasswordMode,
}

impl ChangePasswordForm {
    pub fn new(
        current_password: impl Into<String>,
        new_password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            current_password: current_password.into(),
            new_password: new_password.into(),
            confirm_password: confirm_password.into(),
            mode: ChangePasswordMode::Change,
        }
    }

    pub fn with_mode(mut self, mode: ChangePasswordMode) -> Self {
        self.mode = mode;
        self
    }
}

impl std::fmt::Debug for ChangePasswordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangePasswordForm")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    app_id: String,
    policy: PasswordPolicy,
}

impl RequestBuilder {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            policy: PasswordPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PasswordPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    /// Build a password reset request for `email`
    pub fn forgot_password(&self, email: &str) -> Result<ForgotPasswordRequest, ValidationError> {
        debug!("forgot_password() called");

        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::required("Email"));
        }
        if self.app_id.trim().is_empty() {
            return Err(ValidationError::required("App ID"));
        }

        let request = ForgotPasswordRequest {
            email: email.to_string(),
            app_id: self.app_id.clone(),
        };

        request
            .validate()
            .map_err(|e| ValidationError::invalid("Email", e.to_string()))?;

        Ok(request)
    }

    /// Build a change password request in [`ChangePasswordMode::Change`]
    pub fn change_password(
        &self,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> Result<ChangePasswordRequest, ValidationError> {
        self.change_password_form(&ChangePasswordForm::new(current, new, confirm))
    }

    /// Build a change password request from the form input
    ///
    /// Checks required fields first, then the complexity policy, then the
    /// confirmation.
    pub fn change_password_form(
        &self,
        form: &ChangePasswordForm,
    ) -> Result<ChangePasswordRequest, ValidationError> {
        debug!("change_password_form() called: {form:?}");

        if form.current_password.is_empty() {
            return Err(ValidationError::required(form.mode.current_password_label()));
        }
        if form.new_password.is_empty() {
            return Err(ValidationError::required("New Password"));
        }
        if form.confirm_password.is_empty() {
            return Err(ValidationError::required("Confirm Password"));
        }

        self.policy.check(&form.new_password)?;

        if form.new_password != form.confirm_password {
            return Err(ValidationError::ConfirmationMismatch);
        }

        let request = ChangePasswordRequest {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
        };

        request
            .validate()
            .map_err(|e| ValidationError::invalid("Password", e.to_string()))?;

        Ok(request)
    }

    /// Build a logout request for whoever is in `session`
    ///
    /// Never fails; an absent session yields an empty user id.
    pub fn logout(session: &Session) -> LogoutRequest {
        LogoutRequest {
            user_id: session.user_id().unwrap_or_default(),
        }
    }
}
