//! API utilities for talking to the remote form-data service
//!
//! Holds the injected [`ApiConfig`], the two-kind [`ApiError`], and the
//! response decoding shared by every endpoint wrapper.

use contracts::domain::a001_form_record::aggregate::ApiErrorBody;
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "https://api.wenepal.com/api";

/// Base URL of the remote API.
///
/// Built once in `App` and handed to pages through Leptos context, so page
/// logic never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Compile-time `API_URL` override, otherwise the public API.
    pub fn from_build_env() -> Self {
        match option_env!("API_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.endpoint("/get-all-form-data");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Endpoint with a single percent-encoded id segment appended
    pub fn endpoint_for(&self, path: &str, id: &str) -> String {
        format!("{}{}/{}", self.base_url, path, urlencoding::encode(id))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `message` is the body's `error` field when present
    #[error("server responded with HTTP {status}")]
    Server { status: u16, message: Option<String> },
    /// Request never completed or the body could not be read
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Every call the pages make, used to pick the banner text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Save,
    FetchOne,
    FetchAll,
    Update,
    Delete,
}

impl ApiOperation {
    fn server_fallback(&self) -> &'static str {
        match self {
            ApiOperation::Save => "Failed to save data",
            ApiOperation::FetchOne => "Failed to fetch data",
            ApiOperation::FetchAll => "Failed to fetch users",
            ApiOperation::Update => "Failed to update user",
            ApiOperation::Delete => "Failed to delete user",
        }
    }

    fn transport_message(&self) -> &'static str {
        match self {
            ApiOperation::Save => "Network error: Unable to save data",
            ApiOperation::FetchOne => "Network error: Unable to fetch data",
            ApiOperation::FetchAll => "Network error: Unable to fetch users",
            ApiOperation::Update => "Network error: Unable to update user",
            ApiOperation::Delete => "Network error: Unable to delete user",
        }
    }
}

impl ApiError {
    /// Text for the error banner
    pub fn user_message(&self, operation: ApiOperation) -> String {
        match self {
            ApiError::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            ApiError::Server { .. } => operation.server_fallback().to_string(),
            ApiError::Transport(_) => operation.transport_message().to_string(),
        }
    }
}

/// Turns a finished HTTP exchange into either the decoded body or an
/// [`ApiError`]. Kept free of gloo types so it can be tested natively.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(ApiError::Server { status, message });
    }
    serde_json::from_str(body)
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

/// Same as [`decode_response`] for endpoints whose success body is ignored.
pub fn check_response(status: u16, body: &str) -> Result<(), ApiError> {
    decode_response::<serde_json::Value>(status, body)
        .map(|_| ())
        .or_else(|e| match e {
            // пустое тело на 2xx (204 и т.п.) тоже успех
            ApiError::Transport(_) if (200..300).contains(&status) => Ok(()),
            other => Err(other),
        })
}

pub(crate) async fn read_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
    decode_response(status, &body)
}

pub(crate) async fn read_empty_response(response: gloo_net::http::Response) -> Result<(), ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
    check_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:5000/api/");
        assert_eq!(config.base_url(), "http://localhost:5000/api");
        assert_eq!(
            config.endpoint("/get-all-form-data"),
            "http://localhost:5000/api/get-all-form-data"
        );
    }

    #[test]
    fn test_endpoint_for_encodes_id() {
        let config = ApiConfig::new(DEFAULT_API_URL);
        assert_eq!(
            config.endpoint_for("/get-form-data", "a b/c"),
            "https://api.wenepal.com/api/get-form-data/a%20b%2Fc"
        );
    }

    #[test]
    fn test_decode_success() {
        let value: Vec<u32> = decode_response(200, "[1,2,3]").unwrap();
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_server_error_with_message() {
        let err = decode_response::<serde_json::Value>(404, r#"{"error":"User not found"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: Some("User not found".to_string())
            }
        );
        assert_eq!(err.user_message(ApiOperation::FetchOne), "User not found");
    }

    #[test]
    fn test_decode_server_error_without_message_falls_back() {
        let err = decode_response::<serde_json::Value>(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err.user_message(ApiOperation::Update), "Failed to update user");
        assert_eq!(err.user_message(ApiOperation::Save), "Failed to save data");
    }

    #[test]
    fn test_malformed_success_body_is_transport_error() {
        let err = decode_response::<Vec<u32>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(
            err.user_message(ApiOperation::FetchAll),
            "Network error: Unable to fetch users"
        );
    }

    #[test]
    fn test_check_response_accepts_empty_success() {
        assert!(check_response(204, "").is_ok());
        assert!(check_response(200, r#"{"message":"deleted"}"#).is_ok());
        assert!(check_response(400, r#"{"error":"bad id"}"#).is_err());
    }
}
