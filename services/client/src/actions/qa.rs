//! services/client/src/actions/qa.rs
//!
//! View-facing wrappers around the Q&A store.

use super::contextual_message;
use crate::gateway::GatewayError;
use crate::stores::QaStore;
use learnhub_core::domain::QaRecord;
use learnhub_core::ports::Notifier;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct QaActions {
    store: QaStore,
    notifier: Arc<dyn Notifier>,
    asking: Arc<AtomicBool>,
}

impl QaActions {
    pub fn new(store: QaStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            asking: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Asks a question. Blank input is rejected with a warning before any
    /// network call and yields `Ok(None)`.
    pub async fn handle_ask(
        &self,
        document_id: Option<i64>,
        question: &str,
    ) -> Result<Option<QaRecord>, GatewayError> {
        if question.trim().is_empty() {
            self.notifier.warning("Please enter a question");
            return Ok(None);
        }

        self.asking.store(true, Ordering::SeqCst);
        let result = self.store.ask_question(document_id, question).await;
        self.asking.store(false, Ordering::SeqCst);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                self.notifier
                    .error(contextual_message(&e, "Failed to ask question"));
                Err(e)
            }
        }
    }

    pub async fn handle_feedback(&self, qa_id: i64, helpful: bool) -> Result<(), GatewayError> {
        match self.store.submit_feedback(qa_id, helpful).await {
            Ok(()) => {
                self.notifier.success("Feedback submitted");
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .error(contextual_message(&e, "Feedback submission failed"));
                Err(e)
            }
        }
    }

    pub fn asking(&self) -> bool {
        self.asking.load(Ordering::SeqCst)
    }
}
