use crate::{
    auth_service_client::RemoteAuthClient,
    config::AppConfig,
    error::ValidationError,
    messages::MessageCatalog,
    services::auth::{
        ChangePasswordEffects, ChangePasswordForm, PasswordPolicy, RequestBuilder, ResultHandler,
    },
    session::Session,
    types::{CompletionSignal, OperationResult, OperationState},
    ui::{Navigator, Notifier},
};
use log::{debug, info};

/// Entry point for the account flows
///
/// Each flow builds and validates a request, sends it through the auth
/// client, and lets the result handler apply local side effects before the
/// completion signal is returned.
pub struct AccountApi<AuthClient, Nav, Notify>
where
    AuthClient: RemoteAuthClient,
    Nav: Navigator,
    Notify: Notifier,
{
    pub auth_client: AuthClient,
    pub navigator: Nav,
    pub notifier: Notify,
    pub messages: MessageCatalog,
    pub requests: RequestBuilder,
    pub post_password_change_route: String,
}

impl<AuthClient, Nav, Notify> AccountApi<AuthClient, Nav, Notify>
where
    AuthClient: RemoteAuthClient,
    Nav: Navigator,
    Notify: Notifier,
{
    pub fn new(auth_client: AuthClient, navigator: Nav, notifier: Notify, config: &AppConfig) -> Self {
        AccountApi {
            auth_client,
            navigator,
            notifier,
            messages: MessageCatalog::default(),
            requests: RequestBuilder::new(config.app.app_id.clone())
                .with_policy(PasswordPolicy::new(config.password.min_length)),
            post_password_change_route: config.navigation.post_password_change_route.clone(),
        }
    }

    /// Request a password reset email
    ///
    /// Returns a validation error, without contacting the server, if the email
    /// is empty or malformed.
    pub async fn forgot_password(&self, email: &str) -> Result<CompletionSignal, ValidationError> {
        debug!("forgot_password() called");

        let request = self.requests.forgot_password(email)?;
        let state = OperationState::Idle.submit();

        let result = OperationResult::from(self.auth_client.forgot_password(request).await);
        let signal = ResultHandler::on_forgot_password_result(result);

        log_transition("forgot_password", state, &signal);
        Ok(signal)
    }

    /// Log out whoever is in `session`
    ///
    /// The request is sent even for an empty session. On success the session
    /// is cleared before this returns.
    pub async fn logout(&self, session: &Session) -> CompletionSignal {
        debug!("logout() called");

        let request = RequestBuilder::logout(session);
        let state = OperationState::Idle.submit();

        let result = OperationResult::from(self.auth_client.logout(request).await);
        let signal = ResultHandler::on_logout_result(result, session);

        log_transition("logout", state, &signal);
        signal
    }

    /// Change the password of the signed in user
    ///
    /// Returns a validation error, without contacting the server, if the
    /// form input is incomplete, too weak or not confirmed.
    pub async fn change_password(
        &self,
        form: &ChangePasswordForm,
    ) -> Result<CompletionSignal, ValidationError> {
        debug!("change_password() called: {form:?}");

        let request = self.requests.change_password_form(form)?;
        let state = OperationState::Idle.submit();

        let result = OperationResult::from(self.auth_client.change_password(request).await);
        let signal = ResultHandler::on_change_password_result(
            result,
            &ChangePasswordEffects {
                navigator: &self.navigator,
                notifier: &self.notifier,
                messages: &self.messages,
                destination: &self.post_password_change_route,
            },
        );

        log_transition("change_password", state, &signal);
        Ok(signal)
    }

    /// Leave the change password form without sending anything
    pub fn cancel_change_password(&self) {
        debug!("cancel_change_password() called");
        self.navigator.navigate(&self.post_password_change_route);
    }
}

fn log_transition(operation: &str, from: OperationState, signal: &CompletionSignal) {
    let to = signal.state();
    match &signal.error {
        Some(e) => info!("{operation}: {from:?} -> {to:?}: {e}"),
        None => info!("{operation}: {from:?} -> {to:?}"),
    }
}
