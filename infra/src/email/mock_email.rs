//! Mock email sender
//!
//! Logs verification codes to the console instead of delivering them.
//! This is the default provider so a bare environment boots, and it
//! doubles as the test sender.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use ev_core::services::verification::{mask_email, EmailServiceTrait};

/// Mock email sender for development and testing
#[derive(Clone, Default)]
pub struct MockEmailSender {
    /// Counter of messages "sent"
    message_count: Arc<AtomicU64>,
    /// Last code sent per address
    sent: Arc<Mutex<HashMap<String, String>>>,
    /// Whether to simulate delivery failures
    simulate_failure: bool,
}

impl MockEmailSender {
    /// Create a new mock sender
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock sender that fails every send
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Last code sent to an address
    pub fn sent_code(&self, email: &str) -> Option<String> {
        self.sent.lock().unwrap().get(email).cloned()
    }
}

#[async_trait]
impl EmailServiceTrait for MockEmailSender {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        if self.simulate_failure {
            warn!(
                "Mock email sender simulating failure for {}",
                mask_email(email)
            );
            return Err("simulated email delivery failure".to_string());
        }

        self.message_count.fetch_add(1, Ordering::SeqCst);
        self.sent
            .lock()
            .unwrap()
            .insert(email.to_string(), code.to_string());

        // The whole point of the mock is to make the code visible; the
        // address is still masked like every other log line.
        info!(
            "[MOCK EMAIL] to={} verification code: {}",
            mask_email(email),
            code
        );

        Ok(())
    }
}
