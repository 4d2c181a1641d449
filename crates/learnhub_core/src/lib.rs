pub mod domain;
pub mod ports;

pub use domain::{
    Ack, AnswerResultItem, AnswerSubmitItem, ChunkInfo, Difficulty, Document, DocumentDetail,
    DocumentSection, DocumentStatus, DocumentUpdate, ExamConfig, ExamHistoryItem, ExamResult,
    ExamSession, KeyConcept, LogEntry, LoginForm, LoginResponse, Page, ProcessDetail,
    ProcessProgress, QaRecord, QaSource, QuestionItem, QuestionType, RegisterForm,
    RelatedQuestions, UploadReceipt, User,
};
pub use ports::{CredentialStore, Navigator, Notifier, PortError, PortResult};
