//! Core module for pdfdump
//!
//! The reader abstraction and the types the runner reports with.

pub mod reader;
mod types;

pub use reader::{PdfReader, extract_document, join_pages};
pub use types::*;
