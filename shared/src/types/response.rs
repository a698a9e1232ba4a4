//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API response envelope
///
/// Every verification endpoint returns this shape. Logical failures
/// (wrong code, expired code) are carried as `success: false` with an
/// HTTP 200 status; only transport, validation, and internal faults use
/// error-class HTTP statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl ApiResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status ("healthy")
    pub status: String,

    /// Service name
    pub service: String,

    /// Service version
    pub version: String,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Create a healthy response for the named service
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response_serialization() {
        let response = ApiResponse::success("Verification code sent successfully");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Verification code sent successfully");
    }

    #[test]
    fn test_failure_response_serialization() {
        let response = ApiResponse::failure("Invalid verification code");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid verification code");
    }

    #[test]
    fn test_response_round_trip() {
        let response = ApiResponse::failure("Verification code expired or not found");
        let json = serde_json::to_string(&response).unwrap();
        let parsed: ApiResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, response);
    }
}
