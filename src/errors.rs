//! Unified application error type.
//! All modules (source, document, core, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Data source
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] calamine::Error),

    #[error("Unsupported data source: {0}")]
    UnsupportedSource(String),

    #[error("Missing or malformed header row: {0}")]
    InvalidHeader(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format at row {row}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid hour value at row {row}: {value}")]
    InvalidHour { row: usize, value: String },

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    // ---------------------------
    // Template errors
    // ---------------------------
    #[error("Template parse error: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Template element not found in {page}: {path}")]
    MissingElement { page: String, path: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
