//! services/client/src/adapters/mod.rs
//!
//! Concrete implementations of the core ports: durable credential storage,
//! the notification surface, and navigation.

pub mod credentials;
pub mod navigation;
pub mod notify;

pub use credentials::{FileCredentialStore, MemoryCredentialStore};
pub use navigation::MemoryNavigator;
pub use notify::{MemoryNotifier, Notice, TracingNotifier};
