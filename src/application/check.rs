//! Check Use Case
//!
//! Validates manual-section markers in existing files, so a broken file is
//! found before the next regeneration tries to merge from it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::TextBlob;
use crate::domain::ports::FileSystem;
use crate::domain::services::assert_valid_manual_sections;

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Error,
}

/// Result of checking a single file
#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub path: PathBuf,
    pub status: CheckStatus,
    /// Number of well-formed manual sections
    pub sections: usize,
    /// Human-readable message for failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of the check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub errors: usize,
}

impl CheckResult {
    /// Check if all files passed
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }
}

/// Check Use Case
pub struct CheckUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> CheckUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new CheckUseCase
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Check every path and collect results
    pub fn execute<P: AsRef<Path>>(&self, paths: &[P]) -> CheckResult {
        let mut result = CheckResult::default();

        for path in paths {
            let item = self.check_file(path.as_ref());
            match item.status {
                CheckStatus::Pass => result.passed += 1,
                CheckStatus::Error => result.errors += 1,
            }
            result.items.push(item);
        }

        result
    }

    fn check_file(&self, path: &Path) -> CheckItem {
        let text = match self.fs.read(path) {
            Ok(text) => text,
            Err(e) => {
                return CheckItem {
                    path: path.to_path_buf(),
                    status: CheckStatus::Error,
                    sections: 0,
                    message: Some(format!("cannot read {}: {}", path.display(), e)),
                }
            }
        };

        match assert_valid_manual_sections(&TextBlob::new(path, text)) {
            Ok(sections) => CheckItem {
                path: path.to_path_buf(),
                status: CheckStatus::Pass,
                sections: sections.len(),
                message: None,
            },
            Err(e) => {
                tracing::debug!(error = %e, "marker check failed");
                CheckItem {
                    path: path.to_path_buf(),
                    status: CheckStatus::Error,
                    sections: 0,
                    message: Some(e.to_string()),
                }
            }
        }
    }
}
