use crate::config::{PDF_FILES, PdfDumpConfig};
use crate::core::{FileOutcome, PdfReader, RunSummary, extract_document};
use crate::format::{Formatter, PlainFormatter};
use crate::utils::PdfExtractReader;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

/// Main entry point for pdfdump in CLI mode.
///
/// Extracts every file in [`PDF_FILES`] with the `pdf-extract` backend and
/// prints the blocks to stdout. Only a failure to write to stdout is
/// returned as an error; per-file problems end up in the output instead.
pub fn run(config: &PdfDumpConfig) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut formatter = PlainFormatter::new(config);

    let summary = run_files(&PdfExtractReader::new(), &PDF_FILES, &mut formatter, &mut out)?;

    log::info!(
        "processed {} file(s): {} extracted, {} failed",
        summary.total(),
        summary.succeeded(),
        summary.failed()
    );
    Ok(summary)
}

/// Extracts `files` in order, writing one block per file to `out`.
pub fn run_files<R, F, W, S>(
    reader: &R,
    files: &[S],
    formatter: &mut F,
    out: &mut W,
) -> Result<RunSummary>
where
    R: PdfReader,
    F: Formatter + ?Sized,
    W: Write,
    S: AsRef<str>,
{
    let mut summary = RunSummary::default();

    for file in files {
        let file = file.as_ref();
        log::debug!("extracting {}", file);

        let outcome = process_file(reader, file, formatter, out)
            .with_context(|| format!("Failed to write output for {}", file))?;
        summary.outcomes.push(outcome);
    }

    Ok(summary)
}

fn process_file<R, F, W>(
    reader: &R,
    file: &str,
    formatter: &mut F,
    out: &mut W,
) -> Result<FileOutcome>
where
    R: PdfReader,
    F: Formatter + ?Sized,
    W: Write,
{
    formatter.write_header(out, file)?;

    let outcome = match extract_document(reader, Path::new(file)) {
        Ok(text) => {
            formatter.write_text(out, &text)?;
            FileOutcome::success(file, text.len())
        }
        Err(e) => {
            log::info!("{}: {}", file, e);
            let description = e.to_string();
            formatter.write_error(out, file, &description)?;
            FileOutcome::failure(file, description)
        }
    };

    formatter.write_separator(out)?;
    out.flush()?;
    Ok(outcome)
}
