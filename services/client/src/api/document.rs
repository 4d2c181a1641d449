//! services/client/src/api/document.rs
//!
//! Document management and processing-introspection endpoints.

use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{
    Ack, Document, DocumentDetail, DocumentUpdate, Page, ProcessDetail, ProcessProgress,
    UploadReceipt,
};
use reqwest::multipart::{Form, Part};
use serde::Serialize;

/// Query parameters for the document list.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentQuery {
    pub page: i64,
    pub page_size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// POST /api/v1/documents/upload. Multipart form with a binary `file` part
/// and an optional `title` text part.
pub async fn upload(
    gateway: &Gateway,
    file: Vec<u8>,
    file_name: &str,
    title: Option<&str>,
) -> Result<UploadReceipt, GatewayError> {
    let mut form = Form::new().part("file", Part::bytes(file).file_name(file_name.to_string()));
    if let Some(title) = title {
        form = form.text("title", title.to_string());
    }
    gateway.post_multipart("/api/v1/documents/upload", form).await
}

/// GET /api/v1/documents
pub async fn list(gateway: &Gateway, query: &DocumentQuery) -> Result<Page<Document>, GatewayError> {
    gateway.get_query("/api/v1/documents", query).await
}

/// GET /api/v1/documents/{id}
pub async fn detail(gateway: &Gateway, id: i64) -> Result<DocumentDetail, GatewayError> {
    gateway.get(&format!("/api/v1/documents/{id}")).await
}

/// PUT /api/v1/documents/{id}
pub async fn update(
    gateway: &Gateway,
    id: i64,
    patch: &DocumentUpdate,
) -> Result<Document, GatewayError> {
    gateway.put(&format!("/api/v1/documents/{id}"), patch).await
}

/// DELETE /api/v1/documents/{id}
pub async fn remove(gateway: &Gateway, id: i64) -> Result<Ack, GatewayError> {
    gateway.delete(&format!("/api/v1/documents/{id}")).await
}

/// GET /api/v1/documents/{id}/process-detail. Sections and chunks produced
/// by the pipeline.
pub async fn process_detail(gateway: &Gateway, id: i64) -> Result<ProcessDetail, GatewayError> {
    gateway
        .get(&format!("/api/v1/documents/{id}/process-detail"))
        .await
}

/// GET /api/v1/documents/{id}/progress. Step-by-step processing log.
pub async fn progress(gateway: &Gateway, id: i64) -> Result<ProcessProgress, GatewayError> {
    gateway.get(&format!("/api/v1/documents/{id}/progress")).await
}
