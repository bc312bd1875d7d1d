//! JSON REST Client
//!
//! Thin wrapper over `reqwest` for talking to the credential backend:
//! - fixed base URL, request timeout and JSON content type
//! - optional bearer token per request
//! - classification of transport failures and error bodies
//!
//! Response bodies are buffered so callers can decode them either as the
//! expected payload or as an [`ApiFailure`].

use std::time::Duration;

use http::{Method, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Message shown when no response was received
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Scheme, host and port of the backend (no trailing path)
    pub base_url: String,
    /// Whole-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("credctl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Failures where no HTTP response was obtained
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time
    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// The server could not be reached
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other transport failure (TLS, body read, client construction)
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// User-displayable message
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::InvalidUrl(_) => "The server address is misconfigured.",
            ApiError::Timeout { .. } | ApiError::Connect(_) | ApiError::Transport(_) => {
                CONNECTIVITY_MESSAGE
            }
        }
    }
}

/// Decoded non-success response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub status: u16,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
    error: Option<String>,
    details: Option<serde_json::Value>,
}

/// Buffered HTTP response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Decode the body as `T`
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Interpret the body as the backend's error envelope
    ///
    /// `message` comes from the body's `message` field, then `error`, then
    /// falls back to `Server error (<status>)`.
    pub fn failure(&self) -> ApiFailure {
        let envelope: ErrorEnvelope = serde_json::from_slice(&self.body).unwrap_or_default();
        let message = envelope
            .message
            .or(envelope.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Server error ({})", self.status.as_u16()));

        ApiFailure {
            status: self.status.as_u16(),
            message,
            details: envelope.details,
        }
    }
}

/// REST client bound to one backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from configuration
    pub fn new(config: &ApiClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and an absolute path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Send a request and buffer the response
    ///
    /// Non-2xx statuses are returned as `Ok`; only transport failures are
    /// `Err`.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::ACCEPT, "application/json");

        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| self.map_error(e))?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| self.map_error(e))?;

        tracing::debug!(%method, %url, status = status.as_u16(), "API response");

        Ok(ApiResponse::new(status, bytes.to_vec()))
    }

    /// `GET` without a body
    pub async fn get(&self, path: &str, bearer: Option<&str>) -> Result<ApiResponse, ApiError> {
        self.send::<()>(Method::GET, path, None, bearer).await
    }

    /// `POST` with a JSON body
    pub async fn post<B>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, Some(body), bearer).await
    }

    fn map_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else if error.is_connect() {
            ApiError::Connect(error.to_string())
        } else if error.is_builder() {
            ApiError::InvalidUrl(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiClientConfig {
            base_url: base_url.to_string(),
            ..ApiClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_join() {
        let api = client("http://127.0.0.1:5001/");
        assert_eq!(api.base_url(), "http://127.0.0.1:5001");
        assert_eq!(api.url("/api/auth/login"), "http://127.0.0.1:5001/api/auth/login");
        assert_eq!(api.url("health"), "http://127.0.0.1:5001/health");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiClient::new(&ApiClientConfig {
            base_url: "not a url".to_string(),
            ..ApiClientConfig::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_failure_uses_message_field() {
        let response = ApiResponse::new(
            StatusCode::UNAUTHORIZED,
            br#"{"message":"Invalid email or password"}"#.to_vec(),
        );
        let failure = response.failure();
        assert_eq!(failure.status, 401);
        assert_eq!(failure.message, "Invalid email or password");
        assert!(failure.details.is_none());
    }

    #[test]
    fn test_failure_falls_back_to_error_field_and_status() {
        let response = ApiResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"boom"}"#.to_vec(),
        );
        assert_eq!(response.failure().message, "boom");

        let response = ApiResponse::new(StatusCode::BAD_GATEWAY, b"<html>oops</html>".to_vec());
        assert_eq!(response.failure().message, "Server error (502)");
    }

    #[test]
    fn test_failure_keeps_details() {
        let response = ApiResponse::new(
            StatusCode::BAD_REQUEST,
            br#"{"message":"Invalid","details":{"email":"taken"}}"#.to_vec(),
        );
        let failure = response.failure();
        assert_eq!(failure.details, Some(serde_json::json!({"email": "taken"})));
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Timeout { timeout_ms: 30_000 }.user_message(),
            CONNECTIVITY_MESSAGE
        );
        assert_eq!(
            ApiError::Connect("refused".into()).user_message(),
            CONNECTIVITY_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_connection_refused_is_connect_error() {
        // Reserve a port, then free it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let api = client(&format!("http://127.0.0.1:{port}"));
        let result = api.get("/health", None).await;
        assert!(matches!(result, Err(ApiError::Connect(_))));
    }
}
