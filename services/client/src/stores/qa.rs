//! services/client/src/stores/qa.rs
//!
//! Ordered message log for the active document (or all documents when no
//! document is selected), plus related-question suggestions.

use crate::api;
use crate::api::qa::{AskRequest, HistoryQuery, RelatedQuestionsQuery};
use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::QaRecord;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

const HISTORY_PAGE_SIZE: i64 = 50;
const RELATED_QUESTION_COUNT: i64 = 3;

#[derive(Default)]
struct QaState {
    current_document_id: Option<i64>,
    messages: Vec<QaRecord>,
    // In-flight question text, shown by the view until the answer lands.
    // Never part of the permanent log.
    pending_question: Option<String>,
    loading: bool,
    related_questions: Vec<String>,
    issued_fetches: u64,
}

#[derive(Clone)]
pub struct QaStore {
    gateway: Arc<Gateway>,
    state: Arc<RwLock<QaState>>,
}

impl QaStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(QaState::default())),
        }
    }

    /// Asks a question. The record is appended only after the backend
    /// responds; on a successful single-document ask, related-question
    /// suggestions are refreshed best-effort.
    pub async fn ask_question(
        &self,
        document_id: Option<i64>,
        question: &str,
    ) -> Result<QaRecord, GatewayError> {
        {
            let mut state = self.write();
            state.loading = true;
            state.pending_question = Some(question.to_string());
        }

        let result = api::qa::ask(
            &self.gateway,
            &AskRequest {
                document_id,
                question: question.to_string(),
            },
        )
        .await;

        {
            let mut state = self.write();
            state.loading = false;
            state.pending_question = None;
            if let Ok(record) = &result {
                state.messages.push(record.clone());
            }
        }

        let record = result?;
        if let Some(document_id) = document_id {
            self.fetch_related_questions(document_id, question).await;
        }
        Ok(record)
    }

    /// Refreshes suggestions for the given question. Failures are downgraded
    /// to an empty list; this must never fail the ask that triggered it.
    pub async fn fetch_related_questions(&self, document_id: i64, question: &str) {
        let result = api::qa::related_questions(
            &self.gateway,
            &RelatedQuestionsQuery {
                document_id,
                question: question.to_string(),
                count: RELATED_QUESTION_COUNT,
            },
        )
        .await;

        self.write().related_questions = match result {
            Ok(related) => related.questions,
            Err(e) => {
                debug!("related questions fetch failed: {e}");
                Vec::new()
            }
        };
    }

    /// Replaces the log with the stored history for a document (or the
    /// global history when `document_id` is `None`).
    pub async fn fetch_history(&self, document_id: Option<i64>) -> Result<(), GatewayError> {
        let seq = {
            let mut state = self.write();
            state.loading = true;
            state.issued_fetches += 1;
            state.issued_fetches
        };

        let result = api::qa::history(
            &self.gateway,
            &HistoryQuery {
                document_id,
                page: 1,
                page_size: HISTORY_PAGE_SIZE,
            },
        )
        .await;

        let mut state = self.write();
        state.loading = false;
        let page = result?;
        if seq != state.issued_fetches {
            debug!("discarding stale QA history response (fetch {seq})");
            return Ok(());
        }
        state.messages = page.records;
        state.current_document_id = document_id;
        Ok(())
    }

    /// Submits feedback and patches the matching in-memory record, without a
    /// refetch.
    pub async fn submit_feedback(&self, qa_id: i64, helpful: bool) -> Result<(), GatewayError> {
        api::qa::feedback(&self.gateway, qa_id, helpful).await?;
        let mut state = self.write();
        if let Some(record) = state.messages.iter_mut().find(|m| m.id == qa_id) {
            record.helpful = Some(helpful);
        }
        Ok(())
    }

    pub fn clear_messages(&self) {
        let mut state = self.write();
        state.messages.clear();
        state.related_questions.clear();
        state.current_document_id = None;
    }

    pub fn messages(&self) -> Vec<QaRecord> {
        self.read().messages.clone()
    }

    pub fn pending_question(&self) -> Option<String> {
        self.read().pending_question.clone()
    }

    pub fn related_questions(&self) -> Vec<String> {
        self.read().related_questions.clone()
    }

    pub fn current_document_id(&self) -> Option<i64> {
        self.read().current_document_id
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    fn read(&self) -> RwLockReadGuard<'_, QaState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, QaState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
