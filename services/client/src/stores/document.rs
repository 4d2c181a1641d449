//! services/client/src/stores/document.rs
//!
//! Paginated document list plus an optionally-loaded detail record.

use crate::api;
use crate::api::document::DocumentQuery;
use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{
    Document, DocumentDetail, DocumentStatus, DocumentUpdate, ProcessDetail, ProcessProgress,
    UploadReceipt,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Per-call overrides for the list query; anything left `None` falls back to
/// the store's current page state.
#[derive(Debug, Clone, Default)]
pub struct FetchOverrides {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub status: Option<String>,
}

struct DocumentState {
    documents: Vec<Document>,
    current: Option<DocumentDetail>,
    loading: bool,
    total: i64,
    page: i64,
    page_size: i64,
    // Monotonic fetch counter; list responses older than the latest issued
    // fetch are discarded instead of overwriting newer state.
    issued_fetches: u64,
}

impl Default for DocumentState {
    fn default() -> Self {
        Self {
            documents: Vec::new(),
            current: None,
            loading: false,
            total: 0,
            page: 1,
            page_size: 10,
            issued_fetches: 0,
        }
    }
}

#[derive(Clone)]
pub struct DocumentStore {
    gateway: Arc<Gateway>,
    state: Arc<RwLock<DocumentState>>,
}

impl DocumentStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(DocumentState::default())),
        }
    }

    /// Re-fetches the list, deriving the query from current page state unless
    /// overridden per call.
    pub async fn fetch_documents(&self, overrides: FetchOverrides) -> Result<(), GatewayError> {
        let (seq, query) = {
            let mut state = self.write();
            state.loading = true;
            state.issued_fetches += 1;
            (
                state.issued_fetches,
                DocumentQuery {
                    page: overrides.page.unwrap_or(state.page),
                    page_size: overrides.page_size.unwrap_or(state.page_size),
                    status: overrides.status,
                },
            )
        };

        let result = api::document::list(&self.gateway, &query).await;

        let mut state = self.write();
        state.loading = false;
        let page = result?;
        if seq != state.issued_fetches {
            debug!("discarding stale document list response (fetch {seq})");
            return Ok(());
        }
        state.documents = page.records;
        state.total = page.total;
        Ok(())
    }

    pub async fn fetch_detail(&self, id: i64) -> Result<(), GatewayError> {
        self.write().loading = true;
        let result = api::document::detail(&self.gateway, id).await;
        let mut state = self.write();
        state.loading = false;
        state.current = Some(result?);
        Ok(())
    }

    /// Uploads a document and refetches the first page so the new item shows
    /// up. No optimistic insert; the backend owns the list.
    pub async fn upload(
        &self,
        file: Vec<u8>,
        file_name: &str,
        title: Option<&str>,
    ) -> Result<UploadReceipt, GatewayError> {
        let receipt = api::document::upload(&self.gateway, file, file_name, title).await?;
        self.set_page(1);
        self.fetch_documents(FetchOverrides::default()).await?;
        Ok(receipt)
    }

    /// Applies the backend's authoritative record to the local list.
    pub async fn update(&self, id: i64, patch: &DocumentUpdate) -> Result<Document, GatewayError> {
        let updated = api::document::update(&self.gateway, id, patch).await?;
        let mut state = self.write();
        if let Some(slot) = state.documents.iter_mut().find(|d| d.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Deletes on the backend, then drops the local entry. The cached total
    /// is decremented locally and only becomes exact again on the next list
    /// fetch.
    pub async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        api::document::remove(&self.gateway, id).await?;
        let mut state = self.write();
        state.documents.retain(|d| d.id != id);
        state.total = (state.total - 1).max(0);
        Ok(())
    }

    /// Processing introspection: sections and chunks for a document.
    pub async fn fetch_process_detail(&self, id: i64) -> Result<ProcessDetail, GatewayError> {
        api::document::process_detail(&self.gateway, id).await
    }

    /// Processing introspection: step-by-step pipeline progress.
    pub async fn fetch_progress(&self, id: i64) -> Result<ProcessProgress, GatewayError> {
        api::document::progress(&self.gateway, id).await
    }

    pub fn set_page(&self, page: i64) {
        self.write().page = page;
    }

    pub fn set_page_size(&self, page_size: i64) {
        self.write().page_size = page_size;
    }

    pub fn documents(&self) -> Vec<Document> {
        self.read().documents.clone()
    }

    pub fn completed_documents(&self) -> Vec<Document> {
        self.read()
            .documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Completed)
            .cloned()
            .collect()
    }

    pub fn processing_documents(&self) -> Vec<Document> {
        self.read()
            .documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Processing)
            .cloned()
            .collect()
    }

    pub fn current_document(&self) -> Option<DocumentDetail> {
        self.read().current.clone()
    }

    pub fn total(&self) -> i64 {
        self.read().total
    }

    pub fn page(&self) -> i64 {
        self.read().page
    }

    pub fn page_size(&self) -> i64 {
        self.read().page_size
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    fn read(&self) -> RwLockReadGuard<'_, DocumentState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DocumentState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
