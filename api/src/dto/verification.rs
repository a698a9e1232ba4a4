use serde::{Deserialize, Serialize};

/// Body of `POST /api/send-verification-code`
///
/// The email is passed through as-is; the core performs no format
/// validation, so an empty or malformed address simply produces a code
/// nobody can receive. Only malformed JSON is rejected at this boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeRequest {
    pub email: String,
}

/// Body of `POST /api/verify-code`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}
