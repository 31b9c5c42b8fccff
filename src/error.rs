//! Error type shared by the command layer.
//!
//! Password generation itself cannot fail; everything here comes from the
//! terminal, the clipboard or output encoding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
