//! services/client/src/api/exam.rs
//!
//! Exam generation, submission and history endpoints. Grading happens
//! entirely on the backend; the client only submits and reads back.

use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{
    AnswerSubmitItem, ExamConfig, ExamHistoryItem, ExamResult, ExamSession, Page,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SubmitRequest {
    pub exam_id: i64,
    pub answers: Vec<AnswerSubmitItem>,
    pub time_spent: i64,
}

/// POST /api/v1/exam/generate
pub async fn generate(gateway: &Gateway, config: &ExamConfig) -> Result<ExamSession, GatewayError> {
    gateway.post("/api/v1/exam/generate", config).await
}

/// POST /api/v1/exam/submit
pub async fn submit(gateway: &Gateway, request: &SubmitRequest) -> Result<ExamResult, GatewayError> {
    gateway.post("/api/v1/exam/submit", request).await
}

/// GET /api/v1/exam/history
pub async fn history(
    gateway: &Gateway,
    page: i64,
    page_size: i64,
) -> Result<Page<ExamHistoryItem>, GatewayError> {
    gateway
        .get_query(
            "/api/v1/exam/history",
            &[("page", page), ("page_size", page_size)],
        )
        .await
}

/// GET /api/v1/exam/result/{id}
pub async fn result(gateway: &Gateway, exam_id: i64) -> Result<ExamResult, GatewayError> {
    gateway.get(&format!("/api/v1/exam/result/{exam_id}")).await
}
