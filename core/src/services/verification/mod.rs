//! Email verification service module
//!
//! Coordinates the verification lifecycle: code generation, storage with
//! expiry, delivery, and the verify/consume protocol.

mod config;
mod service;
mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::{mask_email, VerificationService};
pub use traits::{EmailServiceTrait, VerificationStoreTrait};
pub use types::{SendCodeResult, VerifyCodeResult};
