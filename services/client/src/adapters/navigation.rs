//! services/client/src/adapters/navigation.rs
//!
//! Navigation adapter. A UI shell would drive its own router here; the
//! in-memory implementation tracks the current path and a history trail.

use learnhub_core::ports::Navigator;
use std::sync::{Mutex, PoisonError};
use tracing::info;

/// Tracks the current path in memory. Doubles as the test double and as the
/// navigation state for a headless embedding.
pub struct MemoryNavigator {
    current: Mutex<String>,
    history: Mutex<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(initial_path: &str) -> Self {
        Self {
            current: Mutex::new(initial_path.to_string()),
            history: Mutex::new(vec![initial_path.to_string()]),
        }
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemoryNavigator {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn navigate(&self, path: &str) {
        info!("navigating to {path}");
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = path.to_string();
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
