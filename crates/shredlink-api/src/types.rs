use serde::{Deserialize, Serialize};

/// Sent to `POST /api/create`.
///
/// Every field is serialized explicitly; the server distinguishes a `null`
/// password from an absent one, so none of the `Option`s may be skipped.
/// `expire_hours` is part of the wire format but this client always sends
/// `null` and expresses expiry in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRequest {
    pub text: String,
    pub password: Option<String>,
    pub expire_minutes: Option<u32>,
    pub expire_hours: Option<u32>,
    pub one_time_view: bool,
    pub one_time_password: bool,
}

/// Returned by `POST /api/create` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    /// The full shareable URL for the new secret.
    pub url: String,
}

/// Sent to `POST /api/unlock/{token}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockRequest {
    pub password: String,
}

/// Returned by `POST /api/unlock/{token}` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockResponse {
    /// The decrypted secret, exactly as it was stored.
    pub text: String,
}

/// Error body the server attaches to non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_nulls_are_explicit() {
        let request = CreateRequest {
            text: "hello".to_string(),
            password: None,
            expire_minutes: None,
            expire_hours: None,
            one_time_view: false,
            one_time_password: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "text": "hello",
                "password": null,
                "expire_minutes": null,
                "expire_hours": null,
                "one_time_view": false,
                "one_time_password": false,
            })
        );
    }

    #[test]
    fn test_create_request_with_everything_set() {
        let request = CreateRequest {
            text: "secret".to_string(),
            password: Some("hunter2".to_string()),
            expire_minutes: Some(30),
            expire_hours: None,
            one_time_view: true,
            one_time_password: true,
        };

        let json = serde_json::to_string(&request).unwrap();
        let parsed: CreateRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }

    #[test]
    fn test_response_parsing() {
        let ok: CreateResponse =
            serde_json::from_str(r#"{"token":"abc123","url":"http://x/s/abc123"}"#).unwrap();
        assert_eq!(ok.url, "http://x/s/abc123");

        let unlocked: UnlockResponse = serde_json::from_str(r#"{"text":"plain"}"#).unwrap();
        assert_eq!(unlocked.text, "plain");

        let err: ErrorResponse = serde_json::from_str(r#"{"error":"Wrong password"}"#).unwrap();
        assert_eq!(err.error, "Wrong password");
    }
}
