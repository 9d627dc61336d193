mod common;

use account_client::{
    ApiResponse, ChangePasswordRequest, ForgotPasswordRequest, HttpAuthClient, LogoutRequest,
    RemoteAuthClient, RemoteError,
};
use common::MockAuthServer;

#[tokio::test]
async fn forgot_password_posts_email_and_app_id() {
    let mut server = MockAuthServer::start(200, r#"{"status":202,"code":"MSG-0022"}"#).await;
    let client = HttpAuthClient::new(&server.auth_server_config()).expect("failed to create client");

    let response = client
        .forgot_password(ForgotPasswordRequest {
            email: "jane@example.com".to_string(),
            app_id: "STUDYAPP".to_string(),
        })
        .await
        .expect("request should succeed");

    assert_eq!(response.status, Some(202));
    assert_eq!(response.code.as_deref(), Some("MSG-0022"));

    let request = server.next_request().await;
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/auth-server/forgot-password");
    assert_eq!(
        request.json(),
        serde_json::json!({"email": "jane@example.com", "appId": "STUDYAPP"})
    );
}

#[tokio::test]
async fn every_request_carries_a_request_id() {
    let mut server = MockAuthServer::start(200, "").await;
    let client = HttpAuthClient::new(&server.auth_server_config()).expect("failed to create client");

    client
        .logout(LogoutRequest {
            user_id: "user-1".to_string(),
        })
        .await
        .expect("request should succeed");

    let request = server.next_request().await;
    let request_id = request.header("x-request-id").expect("missing request id");
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
    assert!(
        request
            .header("content-type")
            .is_some_and(|value| value.starts_with("application/json"))
    );
}

#[tokio::test]
async fn logout_posts_user_id_and_accepts_empty_body() {
    let mut server = MockAuthServer::start(200, "").await;
    let client = HttpAuthClient::new(&server.auth_server_config()).expect("failed to create client");

    let response = client
        .logout(LogoutRequest {
            user_id: String::new(),
        })
        .await
        .expect("request should succeed");

    assert_eq!(response, ApiResponse::default());

    let request = server.next_request().await;
    assert_eq!(request.path, "/auth-server/logout");
    assert_eq!(request.json(), serde_json::json!({"userId": ""}));
}

#[tokio::test]
async fn change_password_posts_camel_case_fields() {
    let mut server = MockAuthServer::start(200, r#"{"code":"MSG-0032"}"#).await;
    let client = HttpAuthClient::new(&server.auth_server_config()).expect("failed to create client");

    let response = client
        .change_password(ChangePasswordRequest {
            current_password: "Old-pass1".to_string(),
            new_password: "Abcdef1!".to_string(),
        })
        .await
        .expect("request should succeed");

    assert_eq!(response.code.as_deref(), Some("MSG-0032"));

    let request = server.next_request().await;
    assert_eq!(request.path, "/auth-server/change-password");
    assert_eq!(
        request.json(),
        serde_json::json!({"currentPassword": "Old-pass1", "newPassword": "Abcdef1!"})
    );
}

#[tokio::test]
async fn rejection_carries_status_code_and_message() {
    let server = MockAuthServer::start(
        400,
        r#"{"code":"EC_0001","message":"Current password is invalid"}"#,
    )
    .await;
    let client = HttpAuthClient::new(&server.auth_server_config()).expect("failed to create client");

    let err = client
        .change_password(ChangePasswordRequest {
            current_password: "wrong".to_string(),
            new_password: "Abcdef1!".to_string(),
        })
        .await
        .expect_err("request should be rejected");

    assert_eq!(
        err,
        RemoteError::Rejected {
            action: "Change password".to_string(),
            status: 400,
            code: Some("EC_0001".to_string()),
            message: "Current password is invalid".to_string(),
        }
    );
}

#[tokio::test]
async fn client_can_be_reused() {
    let mut server = MockAuthServer::start(200, "{}").await;
    let client = HttpAuthClient::new(&server.auth_server_config()).expect("failed to create client");

    for i in 0..3 {
        client
            .logout(LogoutRequest {
                user_id: format!("user-{i}"),
            })
            .await
            .expect("request should succeed");

        let request = server.next_request().await;
        assert_eq!(request.json()["userId"], format!("user-{i}"));
    }
}
