//! Verification store backends
//!
//! Two interchangeable implementations of
//! [`ev_core::VerificationStoreTrait`], selected at startup:
//! - [`MemoryStore`] - process-local map, expiry checked on read
//! - [`RedisStore`] - shared Redis keys with native TTL

pub mod memory_store;
pub mod redis_client;
pub mod redis_store;

#[cfg(test)]
mod tests;

pub use memory_store::MemoryStore;
pub use redis_client::RedisClient;
pub use redis_store::RedisStore;

use ev_core::VerificationStoreTrait;
use ev_shared::config::store::{StoreBackend, StoreConfig};

use crate::InfrastructureError;

/// Create a verification store from configuration
///
/// The Redis backend connects (and pings) eagerly so a bad URL fails at
/// startup instead of on the first request.
pub async fn create_store(
    config: &StoreConfig,
) -> Result<Box<dyn VerificationStoreTrait>, InfrastructureError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory verification store");
            Ok(Box::new(MemoryStore::new()))
        }
        StoreBackend::Redis => {
            let client = RedisClient::connect(&config.redis_url).await?;
            tracing::info!("Using Redis verification store");
            Ok(Box::new(RedisStore::new(client)))
        }
    }
}
