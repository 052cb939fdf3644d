//! Save result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::{DroppedSection, ResolvedSection};
use crate::domain::value_objects::{SaveOutcome, SigningScheme};

/// Result of a save operation
#[derive(Debug, Clone, Serialize)]
pub struct SaveResult {
    /// Resolved target path
    pub path: PathBuf,
    /// CREATE, UPDATE or NONE
    pub outcome: SaveOutcome,
    /// Scheme the content was signed with; absent when create-only skipped the target
    pub scheme: Option<SigningScheme>,
    /// How each manual section was filled
    pub sections: Vec<ResolvedSection>,
    /// Prior sections the template no longer has
    pub dropped: Vec<DroppedSection>,
    /// Whether the target was actually written
    pub written: bool,
    /// Final signed content
    #[serde(skip)]
    pub content: Option<String>,
    /// Target content before the save, if it existed and was read
    #[serde(skip)]
    pub previous: Option<String>,
}

impl SaveResult {
    /// Result for an existing target left alone in create-only mode
    pub fn skipped(path: PathBuf) -> Self {
        Self {
            path,
            outcome: SaveOutcome::None,
            scheme: None,
            sections: Vec::new(),
            dropped: Vec::new(),
            written: false,
            content: None,
            previous: None,
        }
    }

    /// Whether the outcome would change the file on disk
    pub fn is_change(&self) -> bool {
        self.outcome.is_write()
    }
}
