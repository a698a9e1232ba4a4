//! Elastic Email delivery implementation
//!
//! Sends the verification code through the Elastic Email transactional
//! API: a JSON POST to the configured endpoint with the API key in the
//! `X-ElasticEmail-ApiKey` header. Any non-200 response is a delivery
//! failure and carries the provider's response body.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error, info};

use ev_core::services::verification::{mask_email, EmailServiceTrait};

use crate::InfrastructureError;

/// Timeout for provider API requests
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Elastic Email sender configuration
#[derive(Debug, Clone)]
pub struct ElasticEmailConfig {
    /// Elastic Email API key
    pub api_key: String,
    /// Sender address
    pub from_email: String,
    /// Provider HTTP endpoint
    pub endpoint: String,
    /// Code expiry shown to the recipient, in minutes
    pub expiry_minutes: i64,
}

/// Elastic Email sender
pub struct ElasticEmailSender {
    client: reqwest::Client,
    config: ElasticEmailConfig,
}

impl ElasticEmailSender {
    /// Create a new sender
    ///
    /// The API key is deliberately not validated here; a missing key is
    /// reported by the provider on the first send.
    pub fn new(config: ElasticEmailConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        info!(
            "Elastic Email sender initialized with endpoint: {}",
            config.endpoint
        );

        Ok(Self { client, config })
    }

    /// Render the HTML message body containing the code and its expiry
    fn render_body(&self, code: &str) -> String {
        format!(
            "<html><body style=\"font-family: sans-serif;\">\
             <h2>Your verification code</h2>\
             <p style=\"font-size: 24px; letter-spacing: 4px;\"><strong>{}</strong></p>\
             <p>This code expires in {} minutes.</p>\
             <p>If you did not request it, you can ignore this message.</p>\
             </body></html>",
            code, self.config.expiry_minutes
        )
    }

    async fn send(&self, to_email: &str, code: &str) -> Result<(), InfrastructureError> {
        let request_body = json!({
            "Recipients": {
                "To": [to_email],
            },
            "Content": {
                "From": self.config.from_email,
                "Subject": "Your verification code",
                "Body": [
                    {
                        "ContentType": "HTML",
                        "Content": self.render_body(code),
                    }
                ],
            },
            "Options": {
                "Transactional": true,
            },
        });

        debug!(
            email = %mask_email(to_email),
            "Sending verification email via Elastic Email"
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("X-ElasticEmail-ApiKey", &self.config.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                email = %mask_email(to_email),
                status = %status,
                "Elastic Email rejected the message"
            );
            return Err(InfrastructureError::Email(format!(
                "provider returned {}: {}",
                status, body
            )));
        }

        info!(
            email = %mask_email(to_email),
            event = "email_delivered",
            "Verification email accepted by provider"
        );

        Ok(())
    }
}

#[async_trait]
impl EmailServiceTrait for ElasticEmailSender {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        self.send(email, code).await.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> ElasticEmailSender {
        ElasticEmailSender::new(ElasticEmailConfig {
            api_key: "test-key".to_string(),
            from_email: "noreply@example.com".to_string(),
            endpoint: "https://api.elasticemail.com/v4/emails".to_string(),
            expiry_minutes: 10,
        })
        .unwrap()
    }

    #[test]
    fn test_render_body_contains_code_and_expiry() {
        let body = sender().render_body("12345");
        assert!(body.contains("12345"));
        assert!(body.contains("10 minutes"));
    }
}
