//! Plain text output format for pdfdump

use anyhow::Result;
use std::io::Write;

use super::Formatter;
use crate::config::PdfDumpConfig;

pub struct PlainFormatter {
    separator: String,
}

impl PlainFormatter {
    pub fn new(config: &PdfDumpConfig) -> Self {
        Self {
            separator: config.separator_line(),
        }
    }
}

impl Default for PlainFormatter {
    fn default() -> Self {
        Self::new(&PdfDumpConfig::default())
    }
}

impl Formatter for PlainFormatter {
    fn write_header(&mut self, output: &mut dyn Write, file: &str) -> Result<()> {
        writeln!(output, "--- Extracting content from: {} ---", file)?;
        Ok(())
    }

    fn write_text(&mut self, output: &mut dyn Write, text: &str) -> Result<()> {
        writeln!(output, "{}", text)?;
        Ok(())
    }

    fn write_error(
        &mut self,
        output: &mut dyn Write,
        file: &str,
        description: &str,
    ) -> Result<()> {
        writeln!(output, "Error reading {}: {}", file, description)?;
        Ok(())
    }

    fn write_separator(&mut self, output: &mut dyn Write) -> Result<()> {
        writeln!(output)?;
        writeln!(output, "{}", self.separator)?;
        writeln!(output)?;
        Ok(())
    }
}
