//! Traits for email delivery and verification store integration

use async_trait::async_trait;

/// Trait for email delivery integration
///
/// Implementations deliver the code to the recipient through an external
/// transactional email provider. A failed delivery must be surfaced as
/// `Err`, never swallowed: the coordinator propagates it to the caller
/// because the store write has already happened by the time delivery runs.
#[async_trait]
pub trait EmailServiceTrait: Send + Sync {
    /// Send a verification code to an email address
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String>;
}

/// Trait for the verification code store
///
/// Keyed by email address, at most one entry per key. Implementations
/// must serialize concurrent operations on the same key (lock or atomic
/// backend commands); operations on different keys are independent.
#[async_trait]
pub trait VerificationStoreTrait: Send + Sync {
    /// Upsert the code for an email, replacing any existing entry, with
    /// expiry `ttl_seconds` from now
    async fn store_code(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Fetch the stored code if present and unexpired
    ///
    /// Missing and expired entries both return `Ok(None)`; an expired
    /// entry is absent whether or not it has been physically purged.
    async fn get_code(&self, email: &str) -> Result<Option<String>, String>;

    /// Remove the entry for an email; deleting an absent entry is not an
    /// error
    async fn delete_code(&self, email: &str) -> Result<(), String>;
}

// Delegating impls so backends picked at startup can be injected as
// boxed trait objects through the generic service.

#[async_trait]
impl EmailServiceTrait for Box<dyn EmailServiceTrait> {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<(), String> {
        (**self).send_verification_code(email, code).await
    }
}

#[async_trait]
impl VerificationStoreTrait for Box<dyn VerificationStoreTrait> {
    async fn store_code(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        (**self).store_code(email, code, ttl_seconds).await
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, String> {
        (**self).get_code(email).await
    }

    async fn delete_code(&self, email: &str) -> Result<(), String> {
        (**self).delete_code(email).await
    }
}
