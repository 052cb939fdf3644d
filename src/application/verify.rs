//! Verify Use Case
//!
//! Batch signature verification over many files.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::ports::FileSystem;
use crate::domain::services::{verify, Verification};

/// Options for the verify operation
#[derive(Debug, Clone, Copy, Default)]
pub struct VerifyOptions {
    /// Treat unsigned files as failures
    pub require_signed: bool,
}

/// Verification of one file
#[derive(Debug, Clone, Serialize)]
pub struct VerifyItem {
    pub path: PathBuf,
    /// Absent when the file could not be read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
    /// Read failure, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerifyItem {
    /// Whether this file fails under `options`
    pub fn is_failure(&self, options: &VerifyOptions) -> bool {
        match self.verification {
            None | Some(Verification::Invalid { .. }) => true,
            Some(Verification::Unsigned) => options.require_signed,
            Some(Verification::Valid { .. }) => false,
        }
    }
}

/// Result of the verify operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyResult {
    pub items: Vec<VerifyItem>,
    pub valid: usize,
    pub invalid: usize,
    pub unsigned: usize,
    pub errors: usize,
}

impl VerifyResult {
    fn add(&mut self, item: VerifyItem) {
        match item.verification {
            Some(Verification::Valid { .. }) => self.valid += 1,
            Some(Verification::Invalid { .. }) => self.invalid += 1,
            Some(Verification::Unsigned) => self.unsigned += 1,
            None => self.errors += 1,
        }
        self.items.push(item);
    }

    /// Whether every file passed under `options`
    pub fn is_success(&self, options: &VerifyOptions) -> bool {
        !self.items.iter().any(|item| item.is_failure(options))
    }
}

/// Verify Use Case
pub struct VerifyUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> VerifyUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Verify every path; unreadable files are reported, not fatal
    pub fn execute<P: AsRef<Path>>(&self, paths: &[P]) -> VerifyResult {
        let mut result = VerifyResult::default();

        for path in paths {
            let path = path.as_ref();
            let item = match self.fs.read(path) {
                Ok(text) => {
                    let verification = verify(&text);
                    tracing::debug!(path = %path.display(), %verification, "verified");
                    VerifyItem {
                        path: path.to_path_buf(),
                        verification: Some(verification),
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "cannot read file");
                    VerifyItem {
                        path: path.to_path_buf(),
                        verification: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            result.add(item);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockFileSystem;
    use crate::domain::services::SignatureCodec;
    use crate::domain::value_objects::SigningScheme;

    fn signed(text: &str) -> String {
        SignatureCodec::default()
            .sign(text, SigningScheme::Full)
            .unwrap()
    }

    #[test]
    fn counts_each_status() {
        let good = signed("a\n");
        let bad = good.replace("\na\n", "\nb\n");
        let fs = MockFileSystem::new()
            .with_file("good.txt", &good)
            .with_file("bad.txt", &bad)
            .with_file("plain.txt", "plain\n");

        let result =
            VerifyUseCase::new(&fs).execute(&["good.txt", "bad.txt", "plain.txt", "missing.txt"]);

        assert_eq!(result.valid, 1);
        assert_eq!(result.invalid, 1);
        assert_eq!(result.unsigned, 1);
        assert_eq!(result.errors, 1);
        assert_eq!(result.items[3].error.as_deref(), Some("file not found"));
    }

    #[test]
    fn unsigned_fails_only_when_required() {
        let fs = MockFileSystem::new().with_file("plain.txt", "plain\n");
        let result = VerifyUseCase::new(&fs).execute(&["plain.txt"]);

        assert!(result.is_success(&VerifyOptions::default()));
        assert!(!result.is_success(&VerifyOptions {
            require_signed: true
        }));
    }

    #[test]
    fn invalid_always_fails() {
        let bad = signed("a\n").replace("\na\n", "\nb\n");
        let fs = MockFileSystem::new().with_file("bad.txt", &bad);

        let result = VerifyUseCase::new(&fs).execute(&["bad.txt"]);
        assert!(!result.is_success(&VerifyOptions::default()));
    }
}
