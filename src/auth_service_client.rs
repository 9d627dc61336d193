use crate::{
    config::AuthServerConfig,
    error::RemoteError,
    http_client::{build_client, handle_http_response, transport_error},
    types::{ApiResponse, ChangePasswordRequest, ForgotPasswordRequest, LogoutRequest},
};
use anyhow::Result;
use log::{debug, info};
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use reqwest::Client;
use serde::Serialize;
use std::fmt::Debug;
use trait_variant::make;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Remote side of the account flows
///
/// Each call performs a single round trip and is never retried.
#[make(Send)]
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait RemoteAuthClient {
    async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ApiResponse, RemoteError>;
    async fn logout(&self, request: LogoutRequest) -> Result<ApiResponse, RemoteError>;
    async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<ApiResponse, RemoteError>;
}

#[derive(Clone)]
pub struct HttpAuthClient {
    client: Client,
    base_url: String,
}

impl HttpAuthClient {
    // API endpoint constants
    const FORGOT_PASSWORD_ENDPOINT: &str = "/forgot-password";
    const LOGOUT_ENDPOINT: &str = "/logout";
    const CHANGE_PASSWORD_ENDPOINT: &str = "/change-password";

    pub fn new(config: &AuthServerConfig) -> Result<Self> {
        let client = build_client(config.request_timeout)?;

        Ok(HttpAuthClient {
            client,
            base_url: config.url.clone(),
        })
    }

    fn build_url(&self, path: &str) -> String {
        // Exactly one "/" between base and path
        let base = self.base_url.trim_end_matches('/');
        let normalized_path = path.trim_start_matches('/');
        format!("{base}/{normalized_path}")
    }

    /// POST request to the auth server with JSON body
    async fn post_json(
        &self,
        action: &str,
        path: &str,
        body: &(impl Debug + Serialize + Sync),
    ) -> Result<ApiResponse, RemoteError> {
        let url = self.build_url(path);
        let request_id = Uuid::new_v4().to_string();
        info!("POST {url} ({REQUEST_ID_HEADER}: {request_id})");
        debug!("{action} body: {body:?}");

        let res = self
            .client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(action, e))?;

        let result = handle_http_response(res, action).await;
        if let Err(e) = &result {
            info!("POST {url} ({REQUEST_ID_HEADER}: {request_id}) failed: {e}");
        }
        result
    }
}

impl RemoteAuthClient for HttpAuthClient {
    async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ApiResponse, RemoteError> {
        self.post_json("Forgot password", Self::FORGOT_PASSWORD_ENDPOINT, &request)
            .await
    }

    async fn logout(&self, request: LogoutRequest) -> Result<ApiResponse, RemoteError> {
        self.post_json("Logout", Self::LOGOUT_ENDPOINT, &request)
            .await
    }

    async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<ApiResponse, RemoteError> {
        self.post_json("Change password", Self::CHANGE_PASSWORD_ENDPOINT, &request)
            .await
    }
}
