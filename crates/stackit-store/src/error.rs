//! Error types for the storage layer.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    /// User not found.
    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    /// Question not found.
    #[error("question not found: {0}")]
    QuestionNotFound(Uuid),

    /// Answer not found.
    #[error("answer not found: {0}")]
    AnswerNotFound(Uuid),

    /// A user with this email is already registered.
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// The requester does not own the parent question of the answer.
    #[error("not the question owner for answer {answer_id}")]
    NotQuestionOwner { answer_id: Uuid },

    /// A stored string failed to parse into its domain type.
    #[error("corrupt row: {0}")]
    CorruptRow(String),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
