//! Domain-specific error types and error handling.
//!
//! Logical verification outcomes (wrong code, no pending code) are NOT
//! errors; they are values in [`crate::services::verification::types`].
//! `DomainError` covers only faults: failing backends, failing delivery,
//! malformed input.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The verification store (in-memory map or Redis) failed
    #[error("Store error: {message}")]
    Store { message: String },

    /// The email provider was unreachable or rejected the message
    #[error("Delivery error: {message}")]
    Delivery { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
