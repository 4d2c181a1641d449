//! services/client/src/api/mod.rs
//!
//! Typed wrappers over the backend REST API, one function per endpoint.
//! These modules only shape requests; every policy (credentials, error
//! mapping, notifications) lives in the gateway.

pub mod auth;
pub mod document;
pub mod exam;
pub mod qa;
