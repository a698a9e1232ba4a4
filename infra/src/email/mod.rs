//! Email delivery module
//!
//! Implementations of [`ev_core::EmailServiceTrait`] for sending
//! verification codes:
//!
//! - **Elastic Email**: production delivery over the provider's HTTP API
//! - **Mock**: console output for development and testing
//!
//! Credentials are not validated up front; a missing API key surfaces as
//! a delivery failure on the first send.

pub mod elastic;
pub mod mock_email;

#[cfg(test)]
mod tests;

pub use elastic::{ElasticEmailConfig, ElasticEmailSender};
pub use mock_email::MockEmailSender;

use ev_core::EmailServiceTrait;
use ev_shared::config::{EmailConfig, VerificationConfig};

/// Create an email service based on configuration
///
/// Unknown providers and an Elastic sender that fails to construct both
/// fall back to the mock sender so the server still boots; the
/// misconfiguration is logged.
pub fn create_email_service(
    email: &EmailConfig,
    verification: &VerificationConfig,
) -> Box<dyn EmailServiceTrait> {
    match email.provider.as_str() {
        "mock" => Box::new(MockEmailSender::new()),
        "elastic" => {
            let config = ElasticEmailConfig {
                api_key: email.api_key.clone(),
                from_email: email.from_email.clone(),
                endpoint: email.endpoint.clone(),
                expiry_minutes: verification.code_expiry_minutes,
            };
            match ElasticEmailSender::new(config) {
                Ok(sender) => Box::new(sender),
                Err(e) => {
                    tracing::error!("Failed to initialize Elastic Email sender: {}", e);
                    tracing::warn!("Falling back to mock email sender");
                    Box::new(MockEmailSender::new())
                }
            }
        }
        other => {
            tracing::warn!(
                "Unknown email provider '{}', falling back to mock sender",
                other
            );
            Box::new(MockEmailSender::new())
        }
    }
}
