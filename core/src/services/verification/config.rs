//! Configuration for the verification service

use crate::domain::entities::verification_code::{DEFAULT_CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of digits in a generated code
    pub code_length: usize,

    /// Number of minutes before a verification code expires
    pub code_expiration_minutes: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

impl VerificationServiceConfig {
    /// Code time-to-live in seconds
    pub fn ttl_seconds(&self) -> u64 {
        (self.code_expiration_minutes.max(0) as u64) * 60
    }
}
