pub mod api;
pub mod auth_service_client;
pub mod config;
pub mod error;
pub mod http_client;
pub mod messages;
pub mod services;
pub mod session;
pub mod types;
pub mod ui;

pub use crate::{
    api::AccountApi,
    auth_service_client::{HttpAuthClient, RemoteAuthClient},
    error::{PolicyViolation, RemoteError, ValidationError},
    messages::MessageCatalog,
    services::auth::{
        ChangePasswordForm, ChangePasswordMode, PasswordPolicy, RequestBuilder, ResultHandler,
    },
    session::{Session, SessionData},
    types::*,
    ui::{LogNavigator, LogNotifier, Navigator, Notifier},
};
