//! TextBlob entity - one candidate file's full content
//!
//! A blob is either freshly rendered (origin = the target it will be saved
//! to) or loaded from disk (origin = the file it was read from). The origin
//! is what errors name when the blob turns out to be unusable.

use std::path::{Path, PathBuf};

/// Immutable text plus the path it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlob {
    origin: PathBuf,
    text: String,
}

impl TextBlob {
    /// Create a new blob
    pub fn new(origin: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    /// Path this blob was read from (or will be written to)
    pub fn origin(&self) -> &Path {
        &self.origin
    }

    /// Full content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the blob, returning its content
    pub fn into_text(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
