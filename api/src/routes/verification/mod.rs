//! Verification endpoints
//!
//! - `POST /api/send-verification-code` - generate, store, and email a code
//! - `POST /api/verify-code` - check a submitted code and consume it on match

pub mod send_code;
pub mod verify_code;

use std::sync::Arc;
use std::time::Duration;

use ev_core::services::verification::{
    EmailServiceTrait, VerificationService, VerificationStoreTrait,
};

pub use send_code::send_code;
pub use verify_code::verify_code;

/// Application state shared across handlers
pub struct AppState<E, S>
where
    E: EmailServiceTrait,
    S: VerificationStoreTrait,
{
    pub verification_service: Arc<VerificationService<E, S>>,

    /// End-to-end budget for one request's store and email calls; on
    /// expiry the in-flight calls are dropped and the client gets a
    /// server error
    pub request_timeout: Duration,
}

impl<E, S> AppState<E, S>
where
    E: EmailServiceTrait,
    S: VerificationStoreTrait,
{
    pub fn new(verification_service: Arc<VerificationService<E, S>>, request_timeout: Duration) -> Self {
        Self {
            verification_service,
            request_timeout,
        }
    }
}
