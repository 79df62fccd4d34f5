//! Unified application error type.
//! All modules (store, core, cli, server) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Request errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No event at position {index} (history has {len} events)")]
    NotFound { index: usize, len: usize },

    #[error("No event at position {0}")]
    NoSuchPosition(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors caused by the request itself: they are reported to the user and
    /// never leave the stores in a modified state.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::NotFound { .. }
                | AppError::NoSuchPosition(_)
                | AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
