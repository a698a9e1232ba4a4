//! Domain entities for email verification.

pub mod verification_code;

pub use verification_code::VerificationCode;
