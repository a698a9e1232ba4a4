//! Types for verification service results

use crate::domain::entities::verification_code::VerificationCode;

/// Message returned when a code was generated, stored, and emailed
pub const MSG_CODE_SENT: &str = "Verification code sent successfully";

/// Message returned when no live code exists for the address
///
/// Missing and expired codes collapse into this single outcome; the
/// distinction appears only in trace diagnostics.
pub const MSG_EXPIRED_OR_NOT_FOUND: &str = "Verification code expired or not found";

/// Message returned when the submitted code does not match
pub const MSG_INVALID_CODE: &str = "Invalid verification code";

/// Message returned when the code matched and was consumed
pub const MSG_VERIFIED: &str = "Verification successful";

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The verification code entity that was created and delivered
    pub verification_code: VerificationCode,

    /// Human-readable outcome message
    pub message: String,
}

/// Result of verifying a code
///
/// Both variants of logical failure (no live code, mismatch) are values,
/// not errors; `Err` is reserved for failing backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCodeResult {
    /// Whether the code matched and was consumed
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl VerifyCodeResult {
    pub(crate) fn verified() -> Self {
        Self {
            success: true,
            message: MSG_VERIFIED.to_string(),
        }
    }

    pub(crate) fn expired_or_not_found() -> Self {
        Self {
            success: false,
            message: MSG_EXPIRED_OR_NOT_FOUND.to_string(),
        }
    }

    pub(crate) fn invalid_code() -> Self {
        Self {
            success: false,
            message: MSG_INVALID_CODE.to_string(),
        }
    }
}
