//! Local side effects of finished remote calls
//!
//! Every handler runs its side effects before it returns the completion
//! signal, so a caller that observes success also observes the effects.

use crate::{
    messages::MessageCatalog,
    session::Session,
    types::{CompletionSignal, OperationResult},
    ui::{Navigator, Notifier},
};
use log::{debug, warn};

/// Collaborators needed after a password change
pub struct ChangePasswordEffects<'a, Nav, Notify>
where
    Nav: Navigator,
    Notify: Notifier,
{
    pub navigator: &'a Nav,
    pub notifier: &'a Notify,
    pub messages: &'a MessageCatalog,
    pub destination: &'a str,
}

/// Service turning operation results into completion signals
pub struct ResultHandler;

impl ResultHandler {
    /// Forgot password has no local effect, the result is passed through
    pub fn on_forgot_password_result(result: OperationResult) -> CompletionSignal {
        debug!("on_forgot_password_result() called: success={}", result.success);
        CompletionSignal::from(result)
    }

    /// Clear the session on success, leave it untouched on failure
    pub fn on_logout_result(result: OperationResult, session: &Session) -> CompletionSignal {
        debug!("on_logout_result() called: success={}", result.success);

        if result.success && !session.clear() {
            debug!("session was already empty");
        }
        if let Some(e) = &result.error {
            warn!("logout failed, keeping session: {e}");
        }

        CompletionSignal::from(result)
    }

    /// Notify and navigate on success, do neither on failure
    ///
    /// The notification is only shown if the server code maps to a message;
    /// navigation happens on every success.
    pub fn on_change_password_result<Nav, Notify>(
        result: OperationResult,
        effects: &ChangePasswordEffects<'_, Nav, Notify>,
    ) -> CompletionSignal
    where
        Nav: Navigator,
        Notify: Notifier,
    {
        debug!("on_change_password_result() called: success={}", result.success);

        if result.success {
            if let Some(message) = result
                .code
                .as_deref()
                .and_then(|code| effects.messages.message_for(code))
            {
                effects.notifier.success(message);
            }
            effects.navigator.navigate(effects.destination);
        } else if let Some(e) = &result.error {
            warn!("change password failed: {e}");
        }

        CompletionSignal::from(result)
    }
}
