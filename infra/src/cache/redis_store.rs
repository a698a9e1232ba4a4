//! Redis-backed verification store
//!
//! Stores one key per email under `verification:code:{email}` with a
//! native Redis TTL, so expiry needs no cooperation from readers and the
//! store is shared across instances. Individual commands are atomic,
//! which gives the per-identity serialization the store contract asks
//! for.

use async_trait::async_trait;
use tracing::debug;

use ev_core::services::verification::{mask_email, VerificationStoreTrait};

use crate::cache::RedisClient;

/// Key prefix for verification codes
const CODE_KEY_PREFIX: &str = "verification:code";

/// Redis-backed verification store
#[derive(Clone)]
pub struct RedisStore {
    client: RedisClient,
}

impl RedisStore {
    /// Create a store over an established Redis connection
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn code_key(email: &str) -> String {
        format!("{}:{}", CODE_KEY_PREFIX, email)
    }
}

#[async_trait]
impl VerificationStoreTrait for RedisStore {
    async fn store_code(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        let key = Self::code_key(email);
        debug!(
            email = %mask_email(email),
            ttl_seconds,
            "Storing verification code in Redis"
        );
        self.client
            .set_with_expiry(&key, code, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, String> {
        // Expired keys are gone as far as GET is concerned; no manual
        // expiry check is needed here.
        self.client
            .get(&Self::code_key(email))
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete_code(&self, email: &str) -> Result<(), String> {
        self.client
            .delete(&Self::code_key(email))
            .await
            .map_err(|e| e.to_string())
    }
}
