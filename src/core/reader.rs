use std::path::Path;

use crate::error::ExtractError;

/// Source of page text for a PDF document.
///
/// Implementations open the document named by `path`, release any handle
/// they acquired before returning, and yield one string per page in page
/// order. A page with nothing extractable is an empty string, not an error.
pub trait PdfReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError>;
}

impl<R: PdfReader + ?Sized> PdfReader for &R {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        (**self).read_pages(path)
    }
}

/// Concatenates page texts, terminating each one with a newline.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
        text.push('\n');
    }
    text
}

/// Reads every page of `path` and joins them into a single string.
pub fn extract_document<R: PdfReader>(reader: &R, path: &Path) -> Result<String, ExtractError> {
    let pages = reader.read_pages(path)?;
    log::debug!("{}: {} page(s)", path.display(), pages.len());
    for (i, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            log::debug!("{}: page {} has no extractable text", path.display(), i + 1);
        }
    }
    Ok(join_pages(pages))
}
