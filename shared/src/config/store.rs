//! Verification store configuration module

use serde::{Deserialize, Serialize};

/// Store backend selection
///
/// The in-memory backend is intended for single-instance deployments and
/// development; Redis for multi-instance deployments where codes must be
/// visible across processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Memory,
    Redis,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "redis" => Some(Self::Redis),
            _ => None,
        }
    }
}

/// Verification store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Which backend to use for storing verification codes
    pub backend: StoreBackend,

    /// Redis connection URL (used when `backend` is `Redis`)
    pub redis_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            redis_url: String::from("redis://localhost:6379"),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    ///
    /// `STORE_BACKEND` selects the backend (`memory` or `redis`);
    /// unrecognized values fall back to the in-memory store.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORE_BACKEND")
            .ok()
            .and_then(|v| StoreBackend::parse(&v))
            .unwrap_or(StoreBackend::Memory);
        let redis_url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string());

        Self { backend, redis_url }
    }
}
