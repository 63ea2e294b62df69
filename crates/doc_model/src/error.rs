//! Error types for document model operations

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocModelError {
    #[error("Unsupported number format: {0:?}")]
    UnsupportedNumFormat(String),
}

pub type Result<T> = std::result::Result<T, DocModelError>;
