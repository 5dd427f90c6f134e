use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use channel_extract::{ExtractError, ExtractOptions, PdfPageSource};
use tracing_subscriber::EnvFilter;

use crate::page_range::parse_page_range;

/// Install the stderr log subscriber. `RUST_LOG` overrides the default `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Print `Error: <e>` to stderr and map to exit code 1.
pub fn fail(e: impl Display) -> i32 {
    eprintln!("Error: {e}");
    1
}

/// Open the source PDF with user-facing diagnostics.
///
/// A missing file is reported as `PDF not found at <path>` before any
/// parsing is attempted.
pub fn open_source(file: &Path, options: ExtractOptions) -> Result<PdfPageSource, i32> {
    PdfPageSource::open(file, options).map_err(|e| match e {
        ExtractError::NotFound(_) => {
            eprintln!("{e}");
            1
        }
        other => fail(other),
    })
}

/// Resolve an optional page range string into 0-indexed page indices.
///
/// `None` selects every page.
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(fail),
        None => Ok((0..page_count).collect()),
    }
}

/// Prints "Processing page N/M..." to stderr while stderr is a terminal.
pub struct ProgressReporter {
    total: usize,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            enabled: io::stderr().is_terminal(),
        }
    }

    /// Report that `done` pages (1-indexed count) are finished.
    pub fn report(&self, done: usize) {
        if self.enabled {
            eprint!("\rProcessing page {}/{}...", done, self.total);
            let _ = io::stderr().flush();
        }
    }

    /// Clear the progress line.
    pub fn finish(&self) {
        if self.enabled {
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
        }
    }
}
