//! Failures that can occur while turning one PDF file into text.

use thiserror::Error;

/// Everything that can go wrong for a single document.
///
/// The runner never propagates these; each one is printed next to the file
/// name and the batch moves on.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("file does not start with a %PDF- header")]
    NotPdf,

    #[error("{0}")]
    Parse(String),

    #[error("PDF library panicked: {0}")]
    Panicked(String),
}

impl From<pdf_extract::OutputError> for ExtractError {
    fn from(e: pdf_extract::OutputError) -> Self {
        ExtractError::Parse(e.to_string())
    }
}
