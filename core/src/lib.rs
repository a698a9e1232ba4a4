//! # VeriMail Core
//!
//! Core business logic and domain layer for the VeriMail backend.
//! This crate contains the verification code entity, the verification
//! coordinator service, the store/email trait seams, and the domain
//! error types. It performs no I/O of its own; backends are injected
//! through the service traits.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::verification_code::VerificationCode;
pub use errors::{DomainError, DomainResult};
pub use services::verification::{
    EmailServiceTrait, VerificationService, VerificationServiceConfig, VerificationStoreTrait,
};
