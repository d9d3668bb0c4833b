use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Documents processed on every run, resolved against the working directory.
pub const PDF_FILES: [&str; 2] = [
    "Campus Ride-Booking App Prototype – Technical Design and Architecture.pdf",
    "Campus Transport App – Product Requirements Document.pdf",
];

/// Name of the optional config file looked up in the current directory.
pub const CONFIG_FILE: &str = "pdfdump.toml";

/// Presentation and diagnostics settings for pdfdump
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfDumpConfig {
    /// Character repeated to build the line printed after each file
    pub separator: char,
    /// Number of separator characters per line
    pub separator_width: usize,
    /// Enable debug logging on stderr
    pub verbose: bool,
}

impl PdfDumpConfig {
    /// Rejects settings that would produce an unusable separator line.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.separator_width == 0 {
            anyhow::bail!("separator_width must be at least 1");
        }
        if self.separator.is_control() {
            anyhow::bail!("separator must be a printable character, got {:?}", self.separator);
        }
        Ok(())
    }

    /// The full separator line, without surrounding blank lines.
    pub fn separator_line(&self) -> String {
        std::iter::repeat_n(self.separator, self.separator_width).collect()
    }

    /// Attempts to load configuration from `pdfdump.toml` in the current directory.
    ///
    /// Returns `Ok(None)` when the file is absent and an error when it exists
    /// but cannot be read or parsed.
    pub fn load_from_file() -> anyhow::Result<Option<Self>> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", CONFIG_FILE))?;
        let config =
            Self::from_toml(&content).with_context(|| format!("Failed to parse {}", CONFIG_FILE))?;
        Ok(Some(config))
    }

    /// Parses a config from TOML text; missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl Default for PdfDumpConfig {
    fn default() -> Self {
        Self {
            separator: '=',
            separator_width: 50,
            verbose: false,
        }
    }
}
