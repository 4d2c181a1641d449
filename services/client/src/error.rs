//! services/client/src/error.rs
//!
//! Defines the primary error type for the entire client.

use crate::config::ConfigError;
use crate::gateway::GatewayError;
use learnhub_core::ports::PortError;

/// The primary error type for the `client` crate.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from the HTTP gateway.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// Represents a standard Input/Output error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
