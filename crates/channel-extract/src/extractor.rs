//! Per-page text extraction and rendering.
//!
//! Pages are read through [`PageSource`], so rendering can be exercised
//! without a PDF on disk. [`PdfPageSource`] is the real implementation backed
//! by [`pdfplumber::Pdf`].

use std::path::Path;

use pdfplumber::{Pdf, TextOptions};
use tracing::{debug, info};

use crate::error::{ExtractError, Result};

/// The marker line written before each page's text.
pub fn page_marker(page_number: usize) -> String {
    format!("===== PAGE {page_number} =====")
}

/// Options forwarded to the PDF library's text extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Use layout-preserving extraction instead of plain reading order.
    pub layout: bool,
}

impl ExtractOptions {
    fn text_options(&self) -> TextOptions {
        TextOptions {
            layout: self.layout,
            ..TextOptions::default()
        }
    }
}

/// An opened document that can hand out the text of each page.
pub trait PageSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Text of the page at 0-based `index`, or `None` if the page has none.
    ///
    /// A blank page and a page without a text layer both yield `None`.
    fn page_text(&self, index: usize) -> Result<Option<String>>;
}

/// In-memory pages, mostly useful for tests and callers that already hold text.
impl<T: AsRef<str>> PageSource for [Option<T>] {
    fn page_count(&self) -> usize {
        self.len()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>> {
        Ok(self
            .get(index)
            .and_then(Option::as_ref)
            .map(|text| text.as_ref().to_string()))
    }
}

/// A PDF opened with `pdfplumber`.
///
/// The parsed document is owned by this value and released when it is
/// dropped.
pub struct PdfPageSource {
    pdf: Pdf,
    text_options: TextOptions,
}

impl PdfPageSource {
    /// Open the PDF at `path`.
    ///
    /// Returns [`ExtractError::NotFound`] without touching the parser if the
    /// path does not exist.
    pub fn open(path: &Path, options: ExtractOptions) -> Result<Self> {
        if !path.exists() {
            return Err(ExtractError::NotFound(path.to_path_buf()));
        }

        let pdf = Pdf::open_file(path, None)?;
        info!(path = %path.display(), pages = pdf.page_count(), "opened PDF");

        Ok(Self {
            pdf,
            text_options: options.text_options(),
        })
    }
}

impl PageSource for PdfPageSource {
    fn page_count(&self) -> usize {
        self.pdf.page_count()
    }

    fn page_text(&self, index: usize) -> Result<Option<String>> {
        let page = self.pdf.page(index)?;
        let text = page.extract_text(&self.text_options);
        Ok(Some(text).filter(|t| !t.is_empty()))
    }
}

/// Extracted text of a single page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    /// 1-based page number in the source document.
    pub number: usize,
    /// Extracted text; empty when the page had none.
    pub text: String,
}

/// Collect the text of the pages at the given 0-based `indices`, in order.
pub fn collect_pages<S>(source: &S, indices: &[usize]) -> Result<Vec<PageText>>
where
    S: PageSource + ?Sized,
{
    collect_pages_with(source, indices, |_| {})
}

/// Like [`collect_pages`], calling `on_page` with the count of pages done so
/// far after each one.
pub fn collect_pages_with<S, F>(
    source: &S,
    indices: &[usize],
    mut on_page: F,
) -> Result<Vec<PageText>>
where
    S: PageSource + ?Sized,
    F: FnMut(usize),
{
    let mut pages = Vec::with_capacity(indices.len());

    for (done, &index) in indices.iter().enumerate() {
        let text = source.page_text(index)?.unwrap_or_default();
        debug!(page = index + 1, chars = text.len(), "extracted page");
        pages.push(PageText {
            number: index + 1,
            text,
        });
        on_page(done + 1);
    }

    Ok(pages)
}

/// Render pages as marker, text and a blank line each, joined by newlines.
///
/// Zero pages render as the empty string.
pub fn render_pages(pages: &[PageText]) -> String {
    let mut out = String::new();

    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&page_marker(page.number));
        out.push('\n');
        out.push_str(&page.text);
        out.push('\n');
    }

    out
}

/// Render pages as a JSON array of `{"page": n, "text": "..."}` objects.
pub fn render_pages_json(pages: &[PageText]) -> Result<String> {
    let value: Vec<serde_json::Value> = pages
        .iter()
        .map(|page| {
            serde_json::json!({
                "page": page.number,
                "text": page.text,
            })
        })
        .collect();

    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}

/// Extract the text of the pages selected by `selection` (0-based indices),
/// or of every page when `selection` is `None`.
///
/// The document is closed before this returns, on success and on error.
pub fn extract_pdf_pages(
    path: &Path,
    options: ExtractOptions,
    selection: Option<&[usize]>,
) -> Result<Vec<PageText>> {
    let source = PdfPageSource::open(path, options)?;

    match selection {
        Some(indices) => collect_pages(&source, indices),
        None => {
            let all: Vec<usize> = (0..source.page_count()).collect();
            collect_pages(&source, &all)
        }
    }
}

/// Extract every page of the PDF at `path` and render it with page markers.
pub fn extract_pdf_text(path: &Path, options: ExtractOptions) -> Result<String> {
    let pages = extract_pdf_pages(path, options, None)?;
    Ok(render_pages(&pages))
}
