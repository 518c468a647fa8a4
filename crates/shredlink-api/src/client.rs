use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::{CreateRequest, CreateResponse, ErrorResponse, UnlockRequest, UnlockResponse};

/// Error type for the ShredLink client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a JSON `{error}` body.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Non-success status without a usable error body.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The request never completed, or the response body was not the
    /// expected JSON.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Async client for the ShredLink HTTP API.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (scheme + host, no trailing `/`).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Store a new secret; returns the shareable link.
    pub async fn create(&self, request: &CreateRequest) -> Result<CreateResponse, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/create", self.base_url))
            .json(request)
            .send()
            .await?;
        parse_response(response).await
    }

    /// Attempt to unlock a password-protected secret.
    pub async fn unlock(&self, token: &str, password: &str) -> Result<UnlockResponse, ApiError> {
        let response = self
            .http
            .post(self.unlock_url(token))
            .json(&UnlockRequest {
                password: password.to_string(),
            })
            .send()
            .await?;
        parse_response(response).await
    }

    fn unlock_url(&self, token: &str) -> String {
        format!(
            "{}/api/unlock/{}",
            self.base_url,
            escape_path_segment(token)
        )
    }
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(ApiError::Rejected {
            status: status.as_u16(),
            message: body.error,
        }),
        Err(_) => Err(ApiError::Status(status.as_u16())),
    }
}

/// Percent-encode a single URL path segment (RFC 3986 unreserved set kept
/// as-is, everything else escaped byte-wise).
fn escape_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(
            client.unlock_url("abc123"),
            "http://localhost:8080/api/unlock/abc123"
        );
    }

    #[test]
    fn test_token_is_path_escaped() {
        let client = ApiClient::new("http://localhost:8080");
        assert_eq!(
            client.unlock_url("a/b?c d"),
            "http://localhost:8080/api/unlock/a%2Fb%3Fc%20d"
        );
    }

    #[test]
    fn test_escape_keeps_unreserved() {
        assert_eq!(escape_path_segment("AZaz09-_.~"), "AZaz09-_.~");
        assert_eq!(escape_path_segment("é"), "%C3%A9");
    }
}
