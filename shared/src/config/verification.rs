//! Verification code policy configuration

use serde::{Deserialize, Serialize};

/// Verification code policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a generated code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minutes until a stored code expires
    #[serde(default = "default_expiry_minutes")]
    pub code_expiry_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            code_expiry_minutes: default_expiry_minutes(),
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let code_length = std::env::var("VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_code_length);
        let code_expiry_minutes = std::env::var("VERIFICATION_CODE_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_expiry_minutes);

        Self {
            code_length,
            code_expiry_minutes,
        }
    }

    /// Code time-to-live in seconds
    pub fn ttl_seconds(&self) -> u64 {
        (self.code_expiry_minutes.max(0) as u64) * 60
    }
}

fn default_code_length() -> usize {
    5
}

fn default_expiry_minutes() -> i64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_config_default() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_length, 5);
        assert_eq!(config.code_expiry_minutes, 10);
        assert_eq!(config.ttl_seconds(), 600);
    }
}
