pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod runner;
pub mod utils;

// Re-export key items for convenience
pub use config::{PDF_FILES, PdfDumpConfig};
pub use core::{FileOutcome, PdfReader, RunSummary, join_pages};
pub use error::ExtractError;
pub use runner::{run, run_files};
pub use utils::PdfExtractReader;
