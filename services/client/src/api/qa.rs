//! services/client/src/api/qa.rs
//!
//! Q&A endpoints: ask, history, feedback, related-question suggestions.

use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{Ack, Page, QaRecord, RelatedQuestions};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    /// `None` asks across all of the user's documents and is omitted from
    /// the request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<i64>,
    pub question: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<i64>,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RelatedQuestionsQuery {
    pub document_id: i64,
    pub question: String,
    pub count: i64,
}

/// POST /api/v1/qa/ask
pub async fn ask(gateway: &Gateway, request: &AskRequest) -> Result<QaRecord, GatewayError> {
    gateway.post("/api/v1/qa/ask", request).await
}

/// GET /api/v1/qa/history
pub async fn history(
    gateway: &Gateway,
    query: &HistoryQuery,
) -> Result<Page<QaRecord>, GatewayError> {
    gateway.get_query("/api/v1/qa/history", query).await
}

/// POST /api/v1/qa/{id}/feedback
pub async fn feedback(gateway: &Gateway, qa_id: i64, helpful: bool) -> Result<Ack, GatewayError> {
    gateway
        .post(
            &format!("/api/v1/qa/{qa_id}/feedback"),
            &serde_json::json!({ "helpful": helpful }),
        )
        .await
}

/// GET /api/v1/qa/related-questions
pub async fn related_questions(
    gateway: &Gateway,
    query: &RelatedQuestionsQuery,
) -> Result<RelatedQuestions, GatewayError> {
    gateway.get_query("/api/v1/qa/related-questions", query).await
}
