//! Type-safe error codes attached to error logs.
//!
//! Codes never reach the response body (clients only see `{"error": ...}`);
//! they exist so log aggregation can group failures by kind.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::PathExtraction;
//! assert_eq!(code.as_str(), "PATH_EXTRACTION");
//! assert_eq!(code.code(), 1003);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors (1000s)
    /// Request was syntactically fine but its content was rejected
    BadRequest,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Path parameter extraction failed
    PathExtraction,

    /// Requested resource was not found
    NotFound,

    /// No route matched the request
    RouteNotFound,

    // Server errors (1500s)
    /// An unexpected internal server error occurred
    InternalError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::JsonExtraction => "JSON_EXTRACTION",
            Self::PathExtraction => "PATH_EXTRACTION",
            Self::NotFound => "NOT_FOUND",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Integer code for logging and monitoring.
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1000,
            Self::JsonExtraction => 1002,
            Self::PathExtraction => 1003,
            Self::NotFound => 1004,
            Self::RouteNotFound => 1005,
            Self::InternalError => 1500,
        }
    }

    /// Message used when the error carries no text of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::JsonExtraction => "Failed to parse request body",
            Self::PathExtraction => "Invalid path parameter",
            Self::NotFound => "Resource not found",
            Self::RouteNotFound => "Not Found",
            Self::InternalError => "An internal server error occurred",
        }
    }

    pub fn is_server_error(&self) -> bool {
        self.code() >= 1500
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::PathExtraction.as_str(), "PATH_EXTRACTION");
        assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
        assert_eq!(ErrorCode::InternalError.to_string(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_code_serializes_like_as_str() {
        let json = serde_json::to_string(&ErrorCode::JsonExtraction).unwrap();
        assert_eq!(json, "\"JSON_EXTRACTION\"");
    }

    #[test]
    fn test_server_error_split() {
        assert!(!ErrorCode::NotFound.is_server_error());
        assert!(!ErrorCode::PathExtraction.is_server_error());
        assert!(!ErrorCode::RouteNotFound.is_server_error());
        assert!(ErrorCode::InternalError.is_server_error());
    }
}
