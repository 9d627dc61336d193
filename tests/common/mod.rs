#![allow(dead_code)]

use account_client::config::{
    AppConfig, AppIdentityConfig, AuthServerConfig, NavigationConfig, PasswordConfig,
};
use std::{sync::Mutex, time::Duration};
use tokio::{
    io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader},
    net::TcpListener,
    sync::mpsc,
    task::JoinHandle,
};

pub const APP_ID: &str = "STUDYAPP";
pub const DESTINATION: &str = "/coordinator/studies/sites";

/// A request as seen by the mock auth server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

/// Minimal HTTP/1.1 server answering every request with the same response
pub struct MockAuthServer {
    pub url: String,
    requests: mpsc::UnboundedReceiver<RecordedRequest>,
    handle: JoinHandle<()>,
}

impl MockAuthServer {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock server");
        let addr = listener.local_addr().expect("failed to get local addr");
        let (tx, requests) = mpsc::unbounded_channel();

        let handle = tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let tx = tx.clone();

                tokio::spawn(async move {
                    let (read_half, mut write_half) = stream.split();
                    let mut reader = BufReader::new(read_half);

                    let mut request_line = String::new();
                    if reader.read_line(&mut request_line).await.is_err() {
                        return;
                    }
                    let mut parts = request_line.split_whitespace();
                    let method = parts.next().unwrap_or_default().to_string();
                    let path = parts.next().unwrap_or_default().to_string();

                    // Read HTTP headers
                    let mut headers = Vec::new();
                    loop {
                        let mut line = String::new();
                        if reader.read_line(&mut line).await.is_err() {
                            return;
                        }
                        if line.trim().is_empty() {
                            break;
                        }
                        if let Some((key, value)) = line.split_once(':') {
                            headers.push((key.trim().to_string(), value.trim().to_string()));
                        }
                    }

                    let content_length = headers
                        .iter()
                        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, value)| value.parse::<usize>().ok())
                        .unwrap_or(0);
                    let mut request_body = vec![0u8; content_length];
                    if reader.read_exact(&mut request_body).await.is_err() {
                        return;
                    }

                    let _ = tx.send(RecordedRequest {
                        method,
                        path,
                        headers,
                        body: String::from_utf8_lossy(&request_body).into_owned(),
                    });

                    let http_response = format!(
                        "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = write_half.write_all(http_response.as_bytes()).await;
                    let _ = write_half.shutdown().await;
                });
            }
        });

        Self {
            url: format!("http://{addr}/auth-server"),
            requests,
            handle,
        }
    }

    /// Wait for the next recorded request
    pub async fn next_request(&mut self) -> RecordedRequest {
        tokio::time::timeout(Duration::from_secs(5), self.requests.recv())
            .await
            .expect("no request within timeout")
            .expect("mock server stopped")
    }

    /// Recorded request, if one arrived already
    pub fn try_next_request(&mut self) -> Option<RecordedRequest> {
        self.requests.try_recv().ok()
    }

    pub fn auth_server_config(&self) -> AuthServerConfig {
        AuthServerConfig {
            url: self.url.clone(),
            request_timeout: Duration::from_secs(5),
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            auth_server: self.auth_server_config(),
            app: AppIdentityConfig {
                app_id: APP_ID.to_string(),
            },
            navigation: NavigationConfig {
                post_password_change_route: DESTINATION.to_string(),
            },
            password: PasswordConfig { min_length: 8 },
        }
    }
}

impl Drop for MockAuthServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Navigator remembering every requested route
#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<String>>,
}

impl account_client::Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// Notifier remembering every success message
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: Mutex<Vec<String>>,
}

impl account_client::Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
