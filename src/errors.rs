//! Unified application error type.
//! All modules (store, sheet, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::fmt;
use std::io;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// One structural validation failure, tied to a named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Field-level failures collected over a whole input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(FieldError::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / store
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid range address: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid {0}")]
    InvalidField(FieldError),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(String),

    #[error("Invalid turn: {0} (expected morning, afternoon or night)")]
    InvalidTurn(String),

    // ---------------------------
    // Not-found conditions
    // ---------------------------
    #[error("{0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Status-like severity for the calling layer to render: validation
    /// errors are client errors, missing data is not-found, store and IO
    /// failures are server errors.
    pub fn status(&self) -> u16 {
        match self {
            AppError::NotFound(_) => 404,
            AppError::Io(_)
            | AppError::Store(_)
            | AppError::Config(_)
            | AppError::Backup(_)
            | AppError::Csv(_)
            | AppError::Json(_) => 500,
            _ => 400,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}
