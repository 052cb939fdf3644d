//! Header comment style for inserted signature headers

use serde::{Deserialize, Serialize};

/// Comment syntax used when a signature header has to be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// `/** ... */` doc block
    #[default]
    Block,
    /// `//` line comments
    Line,
    /// `#` line comments
    Hash,
}

impl HeaderStyle {
    /// Opening line of the comment, if the style has one
    pub fn open(self) -> Option<&'static str> {
        match self {
            HeaderStyle::Block => Some("/**"),
            HeaderStyle::Line | HeaderStyle::Hash => None,
        }
    }

    /// Closing line of the comment, if the style has one
    pub fn close(self) -> Option<&'static str> {
        match self {
            HeaderStyle::Block => Some(" */"),
            HeaderStyle::Line | HeaderStyle::Hash => None,
        }
    }

    /// Prefix for a content line (no trailing space)
    pub fn line_prefix(self) -> &'static str {
        match self {
            HeaderStyle::Block => " *",
            HeaderStyle::Line => "//",
            HeaderStyle::Hash => "#",
        }
    }
}

impl std::str::FromStr for HeaderStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "block" => Ok(HeaderStyle::Block),
            "line" => Ok(HeaderStyle::Line),
            "hash" => Ok(HeaderStyle::Hash),
            other => Err(format!("unknown header style '{}'", other)),
        }
    }
}
