//! services/client/src/actions/document.rs
//!
//! View-facing wrappers around the document store.

use super::contextual_message;
use crate::gateway::GatewayError;
use crate::stores::DocumentStore;
use learnhub_core::domain::{Document, DocumentUpdate, UploadReceipt};
use learnhub_core::ports::Notifier;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct DocumentActions {
    store: DocumentStore,
    notifier: Arc<dyn Notifier>,
    uploading: Arc<AtomicBool>,
}

impl DocumentActions {
    pub fn new(store: DocumentStore, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            uploading: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Uploads a document, toasting the backend's receipt message on success.
    pub async fn handle_upload(
        &self,
        file: Vec<u8>,
        file_name: &str,
        title: Option<&str>,
    ) -> Result<UploadReceipt, GatewayError> {
        self.uploading.store(true, Ordering::SeqCst);
        let result = self.store.upload(file, file_name, title).await;
        self.uploading.store(false, Ordering::SeqCst);
        match result {
            Ok(receipt) => {
                self.notifier.success(&receipt.message);
                Ok(receipt)
            }
            Err(e) => {
                self.notifier
                    .error(contextual_message(&e, "Document upload failed"));
                Err(e)
            }
        }
    }

    pub async fn handle_delete(&self, id: i64) -> Result<(), GatewayError> {
        match self.store.delete(id).await {
            Ok(()) => {
                self.notifier.success("Document deleted");
                Ok(())
            }
            Err(e) => {
                self.notifier.error(contextual_message(&e, "Delete failed"));
                Err(e)
            }
        }
    }

    pub async fn handle_update(
        &self,
        id: i64,
        patch: &DocumentUpdate,
    ) -> Result<Document, GatewayError> {
        match self.store.update(id, patch).await {
            Ok(updated) => {
                self.notifier.success("Document updated");
                Ok(updated)
            }
            Err(e) => {
                self.notifier.error(contextual_message(&e, "Update failed"));
                Err(e)
            }
        }
    }

    pub fn uploading(&self) -> bool {
        self.uploading.load(Ordering::SeqCst)
    }
}
