//! Gateway Errors
//!
//! Every failure a dashboard action can hit, from the transport up to
//! client-side validation. All of them end up as a transient notice.

use serde::{Deserialize, Serialize};

/// Result type for gateway calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the backend gateway or by pre-flight validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// Request never completed (offline, CORS, DNS, ...)
    Network(String),
    /// Backend answered with a non-success status
    Status { status: u16, body: String },
    /// Response body did not match the expected shape
    Decode(String),
    /// Rejected on the client before any request was sent
    Validation(String),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }

    /// Short text suitable for a notification body
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            ApiError::Status { status: 404, .. } => "The requested item was not found.".to_string(),
            ApiError::Status { status, .. } => format!("Request failed with status {}.", status),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
            ApiError::Validation(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
            ApiError::Validation(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        assert_eq!(
            ApiError::Validation("Pick a group".into()).user_message(),
            "Pick a group"
        );
        let not_found = ApiError::Status { status: 404, body: "{\"detail\":\"Group not found\"}".into() };
        assert_eq!(not_found.user_message(), "The requested item was not found.");
        let server = ApiError::Status { status: 500, body: String::new() };
        assert_eq!(server.user_message(), "Request failed with status 500.");
    }

    #[test]
    fn test_display_and_kind() {
        let err = ApiError::Network("offline".into());
        assert_eq!(err.to_string(), "Network error: offline");
        assert!(!err.is_validation());
        assert!(ApiError::Validation("x".into()).is_validation());
    }
}
