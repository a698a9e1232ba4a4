//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `server` - HTTP server binding and request timeout
//! - `store` - Verification store backend selection (in-memory or Redis)
//! - `email` - Email delivery provider configuration
//! - `verification` - Code length and expiry policy
//!
//! Every knob is read from the environment with a default, so a bare
//! environment boots a working development server (mock email delivery,
//! in-memory store).

pub mod email;
pub mod server;
pub mod store;
pub mod verification;

// Re-export commonly used types
pub use email::EmailConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Verification store configuration
    pub store: StoreConfig,

    /// Email provider configuration
    pub email: EmailConfig,

    /// Verification code policy
    pub verification: VerificationConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            store: StoreConfig::from_env(),
            email: EmailConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            email: EmailConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}
