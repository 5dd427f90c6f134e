//! channel-extract: dump the text of every page of a PDF into a plain text file.
//!
//! Text extraction itself is delegated to [`pdfplumber`]. This crate walks the
//! pages in order, prefixes each with a `===== PAGE <n> =====` marker, and
//! writes the joined result to disk.
//!
//! # Architecture
//!
//! - [`extractor`]: the [`PageSource`] seam, page collection and rendering
//! - [`writer`]: full-replace output writes
//! - [`paths`]: the fixed input/output locations at the repository root

mod error;
pub mod extractor;
pub mod paths;
pub mod writer;

pub use error::{ExtractError, Result};
pub use extractor::{
    ExtractOptions, PageSource, PageText, PdfPageSource, collect_pages, collect_pages_with,
    extract_pdf_pages, extract_pdf_text, page_marker, render_pages, render_pages_json,
};
pub use paths::{DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, ExtractPaths, workspace_root};
pub use writer::write_output;
