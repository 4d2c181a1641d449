//! crates/learnhub_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the client's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! filesystem or a UI toolkit's notification widget.

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external facilities
/// (e.g., the filesystem backing the credential store).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable single-slot storage for the bearer token, surviving process
/// restarts. The in-memory session must always mirror this slot
/// (write-through on login, cleared on logout).
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> PortResult<Option<String>>;
    fn save(&self, token: &str) -> PortResult<()>;
    fn clear(&self) -> PortResult<()>;
}

/// Non-blocking, user-facing notifications (the toast surface).
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// The presentation layer's navigation surface. The session controller uses
/// it to force-navigate to the login view on session invalidation.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}
