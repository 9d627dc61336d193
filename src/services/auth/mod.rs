pub mod password_policy;
pub mod request_builder;
pub mod result_handler;

pub use password_policy::PasswordPolicy;
pub use request_builder::{ChangePasswordForm, ChangePasswordMode, RequestBuilder};
pub use result_handler::{ChangePasswordEffects, ResultHandler};
