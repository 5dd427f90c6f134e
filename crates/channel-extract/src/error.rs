//! Error type for extraction and output.
//!
//! Only a missing input file gets its own check; everything else is whatever
//! the PDF library or the filesystem reported.

use std::io;
use std::path::PathBuf;

use pdfplumber::PdfError;
use thiserror::Error;

/// Errors produced while extracting page text or writing the result.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input PDF does not exist. Raised before any parsing is attempted.
    #[error("PDF not found at {}", .0.display())]
    NotFound(PathBuf),

    /// The PDF library failed to open or interpret the document.
    #[error("failed to read PDF: {0}")]
    Pdf(#[from] PdfError),

    /// The output file (or one of its parent directories) could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON rendering failed.
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ExtractError>;
