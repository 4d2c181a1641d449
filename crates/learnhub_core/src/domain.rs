//! crates/learnhub_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These mirror the wire shapes the learning-platform backend emits, so the
//! field names here are the field names on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Shared Envelopes
//=========================================================================================

/// The uniform pagination envelope used by every list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

/// A plain acknowledgement returned by delete and feedback endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

//=========================================================================================
// Auth
//=========================================================================================

/// The authenticated user's identity record. Immutable from the client side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token payload returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

//=========================================================================================
// Documents
//=========================================================================================

/// Lifecycle of an uploaded document. The backend pipeline owns every
/// transition; the client only observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyConcept {
    pub term: String,
    pub definition: String,
}

/// A document and its AI-derived analysis. The analysis fields stay empty
/// until `status` reaches `Completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub file_path: String,
    pub file_type: String,
    #[serde(default)]
    pub file_size: Option<i64>,
    pub status: DocumentStatus,
    #[serde(default)]
    pub one_sentence_summary: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
    #[serde(default)]
    pub key_concepts: Option<Vec<KeyConcept>>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub learning_suggestions: Option<Vec<String>>,
    #[serde(default)]
    pub estimated_reading_time: Option<String>,
    #[serde(default)]
    pub common_questions: Option<Vec<String>>,
    #[serde(default)]
    pub uploaded_by: Option<i64>,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSection {
    pub id: i64,
    pub document_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub level: i32,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub order_index: i32,
}

/// A document plus its sectioning, as served by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDetail {
    #[serde(flatten)]
    pub document: Document,
    pub sections: Vec<DocumentSection>,
    #[serde(default)]
    pub chunk_count: Option<i64>,
    #[serde(default)]
    pub qa_count: Option<i64>,
}

/// Acknowledgement of an upload; the document starts processing immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadReceipt {
    pub document_id: i64,
    pub status: String,
    pub message: String,
}

/// The client-editable subset of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
}

//=========================================================================================
// Document Processing Introspection
//=========================================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkInfo {
    pub id: i64,
    pub chunk_index: i32,
    pub content: String,
    pub chunk_hash: String,
    #[serde(default)]
    pub section_id: Option<i64>,
}

/// Sectioning and chunking produced by the processing pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDetail {
    pub document_id: i64,
    pub sections: Vec<DocumentSection>,
    pub sections_count: i64,
    pub chunks: Vec<ChunkInfo>,
    pub chunks_count: i64,
    pub total_text_length: i64,
    pub has_vectors: bool,
    pub vector_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Step-by-step progress report for a document still in the pipeline,
/// including the error trace when processing failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessProgress {
    pub document_id: i64,
    pub status: String,
    pub progress: f64,
    pub current_step: String,
    pub completed_steps: i32,
    pub total_steps: i32,
    pub logs: Vec<LogEntry>,
    #[serde(default)]
    pub parsed_text_length: Option<i64>,
    #[serde(default)]
    pub sections_count: Option<i64>,
    #[serde(default)]
    pub chunks_count: Option<i64>,
    #[serde(default)]
    pub ai_analysis_time: Option<f64>,
    #[serde(default)]
    pub total_time: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub error_traceback: Option<String>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

//=========================================================================================
// Q&A
//=========================================================================================

/// A retrieval source that backed an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaSource {
    pub chunk_id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
    pub relevance_score: f64,
}

/// One question-and-answer exchange. `helpful` is the only field the client
/// ever mutates, via feedback submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    pub id: i64,
    #[serde(default)]
    pub document_id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub sources: Vec<QaSource>,
    pub has_answer: bool,
    #[serde(default)]
    pub helpful: Option<bool>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedQuestions {
    pub questions: Vec<String>,
}

//=========================================================================================
// Exams
//=========================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,
    Judge,
    Essay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionItem {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub content: String,
    #[serde(default)]
    pub options: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Parameters for generating an exam. A `document_id` of `None` means the
/// exam draws from all of the user's documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamConfig {
    #[serde(default)]
    pub document_id: Option<i64>,
    pub single_count: i32,
    pub judge_count: i32,
    pub essay_count: i32,
    pub difficulty: Difficulty,
}

/// A generated question set. Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamSession {
    pub exam_id: i64,
    pub title: String,
    #[serde(default)]
    pub document_id: Option<i64>,
    #[serde(default)]
    pub document_title: Option<String>,
    pub total_questions: i32,
    pub single_count: i32,
    pub judge_count: i32,
    pub essay_count: i32,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionItem>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmitItem {
    pub question_id: i64,
    pub user_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResultItem {
    pub question_id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub content: String,
    #[serde(default)]
    pub options: Option<serde_json::Map<String, serde_json::Value>>,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub score: f64,
    #[serde(default)]
    pub ai_feedback: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// The backend's grading verdict for a submitted exam. Produced exactly once
/// by submission and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub exam_id: i64,
    pub title: String,
    #[serde(default)]
    pub document_title: Option<String>,
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub passed: bool,
    pub single_correct: i32,
    pub single_total: i32,
    pub judge_correct: i32,
    pub judge_total: i32,
    pub essay_score: f64,
    pub essay_max: f64,
    pub answers: Vec<AnswerResultItem>,
    pub time_spent: i64,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamHistoryItem {
    pub exam_id: i64,
    pub title: String,
    #[serde(default)]
    pub document_title: Option<String>,
    pub total_score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub passed: bool,
    pub total_questions: i32,
    pub created_at: DateTime<Utc>,
}
