//! Utility modules for pdfdump

pub mod header;
pub mod pdf;

pub use pdf::PdfExtractReader;
