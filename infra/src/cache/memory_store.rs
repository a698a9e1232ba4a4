//! In-memory verification store
//!
//! Intended for single-instance deployments and development. Entries
//! carry their absolute expiry; reads treat expired entries as absent and
//! evict them lazily, so nothing depends on a background sweeper.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use ev_core::services::verification::{mask_email, VerificationStoreTrait};

/// A stored code with its absolute expiry
#[derive(Debug, Clone)]
struct StoredCode {
    code: String,
    expires_at: DateTime<Utc>,
}

/// In-memory verification store
///
/// The map lock serializes same-key operations; readers proceed in
/// parallel and only eviction takes the write lock.
#[derive(Default)]
pub struct MemoryStore {
    codes: RwLock<HashMap<String, StoredCode>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of physically present entries, expired ones included
    /// (test and diagnostics helper)
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

#[async_trait]
impl VerificationStoreTrait for MemoryStore {
    async fn store_code(&self, email: &str, code: &str, ttl_seconds: u64) -> Result<(), String> {
        let entry = StoredCode {
            code: code.to_string(),
            expires_at: Utc::now() + Duration::seconds(ttl_seconds as i64),
        };
        self.codes.write().await.insert(email.to_string(), entry);
        Ok(())
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, String> {
        let expired = {
            let codes = self.codes.read().await;
            match codes.get(email) {
                None => return Ok(None),
                // Live strictly before the expiry instant
                Some(entry) if Utc::now() < entry.expires_at => {
                    return Ok(Some(entry.code.clone()))
                }
                Some(_) => true,
            }
        };

        if expired {
            // Re-check under the write lock; a concurrent store may have
            // replaced the entry since the read.
            let mut codes = self.codes.write().await;
            if let Some(entry) = codes.get(email) {
                if Utc::now() >= entry.expires_at {
                    debug!(
                        email = %mask_email(email),
                        "Evicting expired verification code"
                    );
                    codes.remove(email);
                }
            }
        }

        Ok(None)
    }

    async fn delete_code(&self, email: &str) -> Result<(), String> {
        self.codes.write().await.remove(email);
        Ok(())
    }
}
