//! API Client
//!
//! HTTP bindings to the recipe API and the hosted auth service, organized
//! by domain. Every call runs under a fixed timeout ceiling; the fetch
//! backend has no native timeout on wasm32, so requests race a timer.

mod auth;
mod recipes;

pub use auth::*;
pub use recipes::*;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Ceiling for any single request
const REQUEST_TIMEOUT_MS: u32 = 5_000;

/// Compiled-in recipe API endpoint, local server by default
pub fn api_base() -> &'static str {
    option_env!("POTLUCK_API_URL").unwrap_or("http://localhost:4000")
}

/// Typed transport failure surfaced to screens
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed
    Network(String),
    /// No response within the timeout ceiling
    Timeout,
    /// Non-2xx status, with the server's message when it sent one
    Status { code: u16, message: String },
    /// 2xx body that did not decode
    Decode(String),
}

impl ApiError {
    /// Missing single-record lookup, shown as an empty state
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { code: 404, .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Timeout => write!(f, "Request timed out"),
            ApiError::Status { message, .. } => write!(f, "{message}"),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

pub(crate) fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Run a request against the timeout ceiling
pub(crate) async fn send(
    request: reqwest::RequestBuilder,
) -> Result<reqwest::Response, ApiError> {
    let pending = request.send();
    let deadline = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(pending, deadline);
    match select(pending, deadline).await {
        Either::Left((response, _)) => response.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

/// Decode a JSON body, mapping non-2xx onto a typed failure first
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// Both services answer errors as a JSON object with a message field,
// under different names.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error_description", alias = "msg", alias = "message")]
    error: Option<String>,
}

/// Pull the server's error message if it sent one, else a fallback
pub(crate) async fn status_error(code: u16, response: reqwest::Response) -> ApiError {
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| fallback_message(code));
    ApiError::Status { code, message }
}

fn fallback_message(code: u16) -> String {
    if code == 404 {
        "Not found".to_string()
    } else {
        format!("Request failed with status {code}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_messages() {
        assert_eq!(fallback_message(404), "Not found");
        assert_eq!(fallback_message(500), "Request failed with status 500");
    }

    #[test]
    fn test_error_body_accepts_both_services_shapes() {
        let api: ErrorBody = serde_json::from_str(r#"{"error":"Missing required fields"}"#).unwrap();
        assert_eq!(api.error.as_deref(), Some("Missing required fields"));

        let auth: ErrorBody = serde_json::from_str(r#"{"msg":"Invalid login credentials"}"#).unwrap();
        assert_eq!(auth.error.as_deref(), Some("Invalid login credentials"));

        let empty: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(empty.error.is_none());
    }

    #[test]
    fn test_display_shows_server_message_verbatim() {
        let err = ApiError::Status {
            code: 400,
            message: "Missing required fields".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required fields");
        assert!(!err.is_not_found());

        let missing = ApiError::Status {
            code: 404,
            message: "Not found".to_string(),
        };
        assert!(missing.is_not_found());
    }
}
