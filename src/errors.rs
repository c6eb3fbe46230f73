//! Unified application error type.
//! Every layer (sheets, core, cli) returns AppError so that callers can tell
//! a storage failure apart from bad user input.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook / storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Row encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Worksheet error: {0}")]
    Sheet(String),

    // ---------------------------
    // Validation
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Command outcome (cause already logged)
    // ---------------------------
    #[error("Operation failed: {0}")]
    OperationFailed(&'static str),
}

impl AppError {
    /// True for errors caused by user input rather than by the workbook.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidAmount(_)
                | AppError::InvalidCategory(_)
                | AppError::InvalidNumber(_)
                | AppError::InvalidMonth(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_distinguished_from_storage_errors() {
        assert!(AppError::InvalidAmount("abc".into()).is_validation());
        assert!(AppError::InvalidMonth(13).is_validation());
        assert!(!AppError::Sheet("quota exceeded".into()).is_validation());
        assert!(!AppError::OperationFailed("add expense").is_validation());
    }
}
