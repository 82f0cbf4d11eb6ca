//! API transport
//!
//! The controller and the category lookup talk to the backend through
//! [`RecordTransport`]; [`ApiClient`] is the reqwest implementation.

use crate::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Settled response: status code and raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Human-readable message carried by the body, if any.
    ///
    /// JSON strings are unquoted and objects yield their `message` or
    /// `error` member. Anything else is the body text exactly as received.
    pub fn message(&self) -> Option<String> {
        if self.body.trim().is_empty() {
            return None;
        }

        match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(serde_json::Value::String(s)) => (!s.trim().is_empty()).then_some(s),
            Ok(serde_json::Value::Null) => None,
            Ok(value @ serde_json::Value::Object(_)) => Some(
                ["message", "error"]
                    .iter()
                    .find_map(|k| value.get(k).and_then(|v| v.as_str()).map(String::from))
                    .unwrap_or_else(|| self.body.clone()),
            ),
            _ => Some(self.body.clone()),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> std::result::Result<T, TransportError> {
        serde_json::from_str(&self.body).map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

/// Request never produced a usable response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_decode() || e.is_body() {
            TransportError::Malformed(e.to_string())
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

#[async_trait]
pub trait RecordTransport: Send + Sync {
    /// Issue exactly one request and wait for it to settle.
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError>;
}

/// reqwest-backed transport rooted at a base URL
pub struct ApiClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// `timeout` of `None` leaves requests unbounded.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: builder.build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl RecordTransport for ApiClient {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        tracing::debug!(method = %request.method, %url, "sending request");

        let mut req = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };
        if let Some(body) = &request.body {
            // .json() also sets Content-Type: application/json
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        tracing::debug!(status, bytes = body.len(), "response settled");
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::new(200, "").is_success());
        assert!(ApiResponse::new(299, "").is_success());
        assert!(!ApiResponse::new(199, "").is_success());
        assert!(!ApiResponse::new(300, "").is_success());
        assert!(!ApiResponse::new(500, "").is_success());
    }

    #[test]
    fn test_message_plain_text() {
        let resp = ApiResponse::new(200, "Group updated successfully!");
        assert_eq!(resp.message().as_deref(), Some("Group updated successfully!"));
    }

    #[test]
    fn test_message_json_string() {
        let resp = ApiResponse::new(400, "\"Region code already exists\"");
        assert_eq!(resp.message().as_deref(), Some("Region code already exists"));
    }

    #[test]
    fn test_message_structured() {
        let resp = ApiResponse::new(422, r#"{"message":"price must be positive","code":7}"#);
        assert_eq!(resp.message().as_deref(), Some("price must be positive"));

        let resp = ApiResponse::new(500, r#"{"error":"boom"}"#);
        assert_eq!(resp.message().as_deref(), Some("boom"));

        let resp = ApiResponse::new(500, "{ \"status\": 500 }");
        assert_eq!(resp.message().as_deref(), Some("{ \"status\": 500 }"));
    }

    #[test]
    fn test_message_keeps_body_verbatim() {
        for body in ["Bad code\n", "  padded  ", "[1, 2]", "42"] {
            let resp = ApiResponse::new(400, body);
            assert_eq!(resp.message().as_deref(), Some(body));
        }
    }

    #[test]
    fn test_message_empty() {
        assert_eq!(ApiResponse::new(500, "  ").message(), None);
        assert_eq!(ApiResponse::new(500, "null").message(), None);
        assert_eq!(ApiResponse::new(500, "\"\"").message(), None);
    }

    #[test]
    fn test_url_join() {
        let client = ApiClient::new("http://localhost:8080/api/").unwrap();
        assert_eq!(client.url("/group/42"), "http://localhost:8080/api/group/42");

        let client = ApiClient::new("http://localhost:8080").unwrap();
        assert_eq!(client.url("/region"), "http://localhost:8080/region");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ApiClient::new("not a url").is_err());
    }
}
