//! Error types for the list engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    #[error("Invalid list level: {0} (levels start at 0)")]
    InvalidLevel(i32),

    #[error("Unsupported list style at level {level}: {reason}")]
    UnsupportedStyle { level: u32, reason: String },

    #[error("Document model error: {0}")]
    DocModel(#[from] doc_model::DocModelError),

    #[error("Invalid list settings: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
