//! Shared utilities and common types for the VeriMail server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from environment variables
//! - API response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, EmailConfig, ServerConfig, StoreBackend, StoreConfig, VerificationConfig};
pub use types::response::{ApiResponse, HealthResponse};
