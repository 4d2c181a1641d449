//! services/client/src/stores/mod.rs
//!
//! Reactive state containers, one per domain. Each store is a cheap `Clone`
//! handle over shared state; locks are taken only between awaits, never
//! across one.

pub mod auth;
pub mod document;
pub mod exam;
pub mod qa;

pub use auth::AuthStore;
pub use document::DocumentStore;
pub use exam::ExamStore;
pub use qa::QaStore;
