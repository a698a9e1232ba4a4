//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the VeriMail
//! application. It provides the concrete backends behind the core
//! service traits:
//!
//! - **Cache**: verification store implementations — an in-memory map
//!   with lazy expiry for single-instance deployments and a Redis store
//!   relying on native key TTLs for multi-instance deployments
//! - **Email**: delivery implementations — the Elastic Email HTTP API
//!   for production and a console-logging mock for development and tests

pub mod cache;
pub mod email;

#[cfg(test)]
mod test_support;

pub use cache::{create_store, MemoryStore, RedisClient, RedisStore};
pub use email::{create_email_service, ElasticEmailSender, MockEmailSender};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis store error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for the email provider
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Email provider rejected the message
    #[error("Email service error: {0}")]
    Email(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
