//! Output formatting for the per-file blocks written to stdout

pub mod plain;

use anyhow::Result;
use std::io::Write;

pub use plain::PlainFormatter;

/// Writes the pieces of one file's block. The runner calls `write_header`,
/// then exactly one of `write_text` / `write_error`, then `write_separator`.
pub trait Formatter {
    fn write_header(&mut self, output: &mut dyn Write, file: &str) -> Result<()>;

    fn write_text(&mut self, output: &mut dyn Write, text: &str) -> Result<()>;

    fn write_error(
        &mut self,
        output: &mut dyn Write,
        file: &str,
        description: &str,
    ) -> Result<()>;

    fn write_separator(&mut self, output: &mut dyn Write) -> Result<()>;
}
