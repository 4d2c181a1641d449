//! services/client/src/stores/exam.rs
//!
//! Holds at most one active generated exam session and at most one active
//! result; history is a separate paginated fetch.

use crate::api;
use crate::api::exam::SubmitRequest;
use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{
    AnswerSubmitItem, ExamConfig, ExamHistoryItem, ExamResult, ExamSession,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

#[derive(Default)]
struct ExamState {
    loading: bool,
    current_session: Option<ExamSession>,
    current_result: Option<ExamResult>,
    history: Vec<ExamHistoryItem>,
    history_total: i64,
    issued_fetches: u64,
}

#[derive(Clone)]
pub struct ExamStore {
    gateway: Arc<Gateway>,
    state: Arc<RwLock<ExamState>>,
}

impl ExamStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(ExamState::default())),
        }
    }

    /// Generates a fresh exam, replacing any previous session and clearing
    /// any previous result.
    pub async fn generate(&self, config: &ExamConfig) -> Result<ExamSession, GatewayError> {
        self.write().loading = true;
        let result = api::exam::generate(&self.gateway, config).await;
        let mut state = self.write();
        state.loading = false;
        let session = result?;
        state.current_session = Some(session.clone());
        state.current_result = None;
        Ok(session)
    }

    /// Submits answers and caches the backend's grading verdict. The client
    /// does no scoring of its own.
    pub async fn submit(
        &self,
        exam_id: i64,
        answers: Vec<AnswerSubmitItem>,
        time_spent: i64,
    ) -> Result<ExamResult, GatewayError> {
        self.write().loading = true;
        let result = api::exam::submit(
            &self.gateway,
            &SubmitRequest {
                exam_id,
                answers,
                time_spent,
            },
        )
        .await;
        let mut state = self.write();
        state.loading = false;
        let graded = result?;
        state.current_result = Some(graded.clone());
        Ok(graded)
    }

    pub async fn fetch_history(&self, page: i64, page_size: i64) -> Result<(), GatewayError> {
        let seq = {
            let mut state = self.write();
            state.loading = true;
            state.issued_fetches += 1;
            state.issued_fetches
        };

        let result = api::exam::history(&self.gateway, page, page_size).await;

        let mut state = self.write();
        state.loading = false;
        let history = result?;
        if seq != state.issued_fetches {
            debug!("discarding stale exam history response (fetch {seq})");
            return Ok(());
        }
        state.history = history.records;
        state.history_total = history.total;
        Ok(())
    }

    /// Re-reads a past result by id; results are immutable server-side.
    pub async fn fetch_result(&self, exam_id: i64) -> Result<ExamResult, GatewayError> {
        let result = api::exam::result(&self.gateway, exam_id).await?;
        self.write().current_result = Some(result.clone());
        Ok(result)
    }

    /// Abandons the in-progress exam.
    pub fn clear_session(&self) {
        let mut state = self.write();
        state.current_session = None;
        state.current_result = None;
    }

    pub fn current_session(&self) -> Option<ExamSession> {
        self.read().current_session.clone()
    }

    pub fn current_result(&self) -> Option<ExamResult> {
        self.read().current_result.clone()
    }

    pub fn history(&self) -> Vec<ExamHistoryItem> {
        self.read().history.clone()
    }

    pub fn history_total(&self) -> i64 {
        self.read().history_total
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    fn read(&self) -> RwLockReadGuard<'_, ExamState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ExamState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
