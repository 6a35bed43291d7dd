//! Text extraction — turns a PDF on disk into one plain-text string.
//!
//! Pages are joined with a single space in document order. A document with no
//! extractable text (scanned pages, blank pages) yields an empty string.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::errors::AnalysisError;

const PAGE_SEPARATOR: &str = " ";

/// Reads the PDF at `path` and returns the text of all pages.
///
/// Blocking. Async callers should run this on a blocking thread.
pub fn extract_text(path: &Path) -> Result<String, AnalysisError> {
    // pdf-extract panics on some malformed documents.
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_by_pages(path)
    }))
    .map_err(|_| AnalysisError::Io(format!("{} is not a readable PDF", path.display())))?
    .map_err(|e| AnalysisError::Io(format!("{}: {e}", path.display())))?;

    debug!("Extracted {} page(s) from {}", pages.len(), path.display());

    Ok(join_pages(&pages))
}

/// Joins page texts in order with a single space.
///
/// The reader pads each page with line breaks, so page edges are trimmed and
/// pages without text are skipped. A document with no text yields "".
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(|page| page.as_ref().trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(PAGE_SEPARATOR)
}
