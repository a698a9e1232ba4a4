//! Unit tests for the mock email sender and the provider factory

use ev_core::EmailServiceTrait;
use ev_shared::config::{EmailConfig, VerificationConfig};

use crate::email::{create_email_service, MockEmailSender};
use crate::test_support::LogCapture;

#[tokio::test]
async fn test_mock_sender_records_codes() {
    let sender = MockEmailSender::new();

    sender
        .send_verification_code("a@x.com", "12345")
        .await
        .unwrap();
    sender
        .send_verification_code("b@x.com", "67890")
        .await
        .unwrap();

    assert_eq!(sender.message_count(), 2);
    assert_eq!(sender.sent_code("a@x.com"), Some("12345".to_string()));
    assert_eq!(sender.sent_code("b@x.com"), Some("67890".to_string()));
    assert_eq!(sender.sent_code("c@x.com"), None);
}

#[tokio::test]
async fn test_mock_sender_log_shows_code_but_masks_address() {
    let capture = LogCapture::default();
    let _guard = tracing::subscriber::set_default(capture.subscriber());

    let sender = MockEmailSender::new();
    sender
        .send_verification_code("user@example.com", "12345")
        .await
        .unwrap();

    let logs = capture.contents();
    assert!(logs.contains("verification code: 12345"));
    assert!(logs.contains("u***@example.com"));
    assert!(!logs.contains("user@example.com"));
}

#[tokio::test]
async fn test_failing_sender_surfaces_error() {
    let sender = MockEmailSender::failing();

    let result = sender.send_verification_code("a@x.com", "12345").await;
    assert!(result.is_err());
    assert_eq!(sender.message_count(), 0);
}

#[tokio::test]
async fn test_factory_defaults_to_mock() {
    let email = EmailConfig::default();
    let verification = VerificationConfig::default();

    // Mock provider delivers without any credentials configured
    let service = create_email_service(&email, &verification);
    service
        .send_verification_code("a@x.com", "12345")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_factory_unknown_provider_falls_back_to_mock() {
    let email = EmailConfig {
        provider: "carrier-pigeon".to_string(),
        ..EmailConfig::default()
    };
    let verification = VerificationConfig::default();

    let service = create_email_service(&email, &verification);
    service
        .send_verification_code("a@x.com", "12345")
        .await
        .unwrap();
}
