//! Error types for the wedding-plan data core
//!
//! All errors use thiserror for structured error handling.
//! Persistence failures are deliberately absent from most store APIs:
//! the plan always stays usable in memory, so those are logged instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A snapshot offered for import failed to parse or validate.
    /// The in-memory plan is never touched when this is returned.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Budget category already exists: {0}")]
    DuplicateCategory(String),

    #[error("Unknown budget category: {0}")]
    UnknownCategory(String),

    /// A named operation addressed an id that is not in its collection.
    #[error("No {collection} record with id {id}")]
    NotFound { collection: &'static str, id: i64 },
}

pub type Result<T> = std::result::Result<T, PlanError>;
