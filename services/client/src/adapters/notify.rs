//! services/client/src/adapters/notify.rs
//!
//! Notification adapters. A real UI would surface these as toasts; the
//! default adapter routes them to the log.

use learnhub_core::ports::Notifier;
use std::sync::{Mutex, PoisonError};
use tracing::{error, info, warn};

/// Routes notifications to `tracing`, for the headless binary.
#[derive(Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(target: "notify", "{message}");
    }

    fn warning(&self, message: &str) {
        warn!(target: "notify", "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: "notify", "{message}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

/// Records every notification, letting tests and embedders inspect what the
/// user would have seen.
#[derive(Default)]
pub struct MemoryNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl MemoryNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|n| match n {
                Notice::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn push(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

impl Notifier for MemoryNotifier {
    fn success(&self, message: &str) {
        self.push(Notice::Success(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(Notice::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(Notice::Error(message.to_string()));
    }
}
