//! Business services orchestrating the domain layer.

pub mod verification;

pub use verification::{
    EmailServiceTrait, VerificationService, VerificationServiceConfig, VerificationStoreTrait,
};
