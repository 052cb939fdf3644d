//! Save outcome value object

use std::fmt;

use serde::Serialize;

/// What a save did to the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SaveOutcome {
    /// Target existed and already held the final bytes, or create-only skipped it
    None,
    /// Target existed and was rewritten
    Update,
    /// Target did not exist and was created
    Create,
}

impl SaveOutcome {
    /// Whether the target's bytes change
    pub fn is_write(self) -> bool {
        !matches!(self, SaveOutcome::None)
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::None => write!(f, "NONE"),
            SaveOutcome::Update => write!(f, "UPDATE"),
            SaveOutcome::Create => write!(f, "CREATE"),
        }
    }
}
