//! services/client/src/actions/mod.rs
//!
//! Per-domain helpers the views call directly: each wraps a store action
//! with a busy flag and contextual success/error notifications. The gateway
//! already toasts its own generic message; the contextual toast here is a
//! deliberate second layer.

pub mod document;
pub mod qa;

pub use document::DocumentActions;
pub use qa::QaActions;

use crate::gateway::GatewayError;

/// Backend-reported errors carry their own message; everything else falls
/// back to the caller's contextual string.
fn contextual_message<'a>(error: &'a GatewayError, fallback: &'a str) -> &'a str {
    match error {
        GatewayError::Api { message, .. } => message,
        _ => fallback,
    }
}
