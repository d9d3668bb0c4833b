//! Core types shared across pdfdump modules

/// What was reported for a single input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File name exactly as it appeared in the input list
    pub file: String,
    /// Bytes of text printed on success, failure description otherwise
    pub result: Result<usize, String>,
}

impl FileOutcome {
    /// Records a printed document by size only; the text itself is not kept.
    pub fn success(file: impl Into<String>, text_len: usize) -> Self {
        Self {
            file: file.into(),
            result: Ok(text_len),
        }
    }

    pub fn failure(file: impl Into<String>, description: String) -> Self {
        Self {
            file: file.into(),
            result: Err(description),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of one run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }
}
