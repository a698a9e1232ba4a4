//! Main verification service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use tracing::{debug, error, info, warn};

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{DomainError, DomainResult};

use super::config::VerificationServiceConfig;
use super::traits::{EmailServiceTrait, VerificationStoreTrait};
use super::types::{SendCodeResult, VerifyCodeResult, MSG_CODE_SENT};

/// Verification service coordinating code generation, storage, and delivery
///
/// Per email address the lifecycle is: no code → pending (after send) →
/// consumed, expired, or overwritten by the next send. Sends do not retry
/// internally; a caller-retried send simply overwrites the stored code.
pub struct VerificationService<E: EmailServiceTrait, S: VerificationStoreTrait> {
    /// Email service for delivering codes
    email_service: Arc<E>,

    /// Store holding the single live code per address
    store: Arc<S>,

    /// Service configuration
    config: VerificationServiceConfig,
}

impl<E: EmailServiceTrait, S: VerificationStoreTrait> VerificationService<E, S> {
    /// Create a new verification service
    pub fn new(email_service: Arc<E>, store: Arc<S>, config: VerificationServiceConfig) -> Self {
        Self {
            email_service,
            store,
            config,
        }
    }

    /// Send a verification code to an email address
    ///
    /// Generates a fresh code, stores it with the configured TTL
    /// (unconditionally replacing any previous code for this address),
    /// then emails it. A store failure aborts before anything is sent.
    /// A delivery failure is propagated even though the code is already
    /// persisted; the next send for this address overwrites it.
    pub async fn send_verification_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let verification_code = VerificationCode::new(
            email.to_string(),
            self.config.code_length,
            self.config.code_expiration_minutes,
        );

        debug!(
            email = %mask_email(email),
            event = "code_generated",
            code_length = self.config.code_length,
            "Generated verification code"
        );

        self.store
            .store_code(email, &verification_code.code, self.config.ttl_seconds())
            .await
            .map_err(|e| {
                error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "code_store_failed",
                    "Failed to store verification code"
                );
                DomainError::Store {
                    message: format!("failed to store verification code: {}", e),
                }
            })?;

        self.email_service
            .send_verification_code(email, &verification_code.code)
            .await
            .map_err(|e| {
                // The code stays stored; a retried send overwrites it.
                error!(
                    email = %mask_email(email),
                    error = %e,
                    event = "code_delivery_failed",
                    "Failed to send verification email"
                );
                DomainError::Delivery {
                    message: format!("failed to send verification email: {}", e),
                }
            })?;

        info!(
            email = %mask_email(email),
            event = "code_sent",
            expires_at = %verification_code.expires_at,
            "Verification code sent"
        );

        Ok(SendCodeResult {
            verification_code,
            message: MSG_CODE_SENT.to_string(),
        })
    }

    /// Verify a submitted code for an email address
    ///
    /// Resolution order: no live code → failure ("expired or not found");
    /// mismatch → failure ("invalid"), entry kept so the caller may retry
    /// until expiry or overwrite; match → entry deleted (consumed) and
    /// success. Wrong codes and missing codes are ordinary outcomes, not
    /// errors; `Err` means the store itself failed.
    pub async fn verify_code(&self, email: &str, submitted: &str) -> DomainResult<VerifyCodeResult> {
        let stored = self
            .store
            .get_code(email)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("failed to get verification code: {}", e),
            })?;

        let stored = match stored {
            Some(code) => code,
            None => {
                debug!(
                    email = %mask_email(email),
                    event = "code_absent",
                    "No live verification code for address"
                );
                return Ok(VerifyCodeResult::expired_or_not_found());
            }
        };

        if !codes_match(&stored, submitted) {
            warn!(
                email = %mask_email(email),
                event = "code_mismatch",
                "Submitted verification code does not match"
            );
            return Ok(VerifyCodeResult::invalid_code());
        }

        // Consume the entry so the same code cannot be replayed.
        self.store
            .delete_code(email)
            .await
            .map_err(|e| DomainError::Store {
                message: format!("failed to delete verification code: {}", e),
            })?;

        info!(
            email = %mask_email(email),
            event = "code_verified",
            "Verification successful, code consumed"
        );

        Ok(VerifyCodeResult::verified())
    }
}

/// Compare a stored and a submitted code without leaking the match
/// position through timing
fn codes_match(stored: &str, submitted: &str) -> bool {
    stored.len() == submitted.len() && constant_time_eq(stored.as_bytes(), submitted.as_bytes())
}

/// Mask an email address for log output, keeping only the first character
/// of the local part and the domain
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}
