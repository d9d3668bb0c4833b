use std::fs::File;
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::core::PdfReader;
use crate::error::ExtractError;
use crate::utils::header::{pdf_header_offset, pdf_version};

/// Reads PDFs from disk and extracts page text with `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractReader;

impl PdfExtractReader {
    pub fn new() -> Self {
        Self
    }
}

impl PdfReader for PdfExtractReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<String>, ExtractError> {
        let bytes = read_file(path)?;

        if pdf_header_offset(&bytes).is_none() {
            return Err(ExtractError::NotPdf);
        }
        if let Some(version) = pdf_version(&bytes) {
            log::debug!("{}: PDF {} ({} bytes)", path.display(), version, bytes.len());
        }

        extract_pages(&bytes)
    }
}

/// The file handle lives only for the duration of this call.
fn read_file(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Runs the extractor, turning a panic inside the library into an error.
///
/// The default panic hook is swapped out for the duration of the call so a
/// malformed document shows up once, as its error line, rather than also as
/// a panic report on stderr.
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        log::debug!("pdf-extract panicked: {}", info);
    }));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }));

    panic::set_hook(previous_hook);

    match outcome {
        Ok(result) => Ok(result?),
        Err(payload) => Err(ExtractError::Panicked(panic_message(&*payload))),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
