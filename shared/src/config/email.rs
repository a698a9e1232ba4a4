//! Email provider configuration module

use serde::{Deserialize, Serialize};

/// Default Elastic Email transactional endpoint
const DEFAULT_ENDPOINT: &str = "https://api.elasticemail.com/v4/emails";

/// Email delivery provider configuration
///
/// Credentials are not validated at startup; a missing API key surfaces
/// as a delivery failure on the first send attempt. The `mock` provider
/// is the default so a bare environment boots.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("mock" or "elastic")
    pub provider: String,

    /// Elastic Email API key
    pub api_key: String,

    /// Sender address
    pub from_email: String,

    /// Provider HTTP endpoint
    pub endpoint: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            from_email: String::new(),
            endpoint: String::from(DEFAULT_ENDPOINT),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("ELASTIC_EMAIL_API_KEY").unwrap_or_default(),
            from_email: std::env::var("ELASTIC_EMAIL_FROM").unwrap_or_default(),
            endpoint: std::env::var("ELASTIC_EMAIL_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.provider, "mock");
        assert!(config.api_key.is_empty());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }
}
