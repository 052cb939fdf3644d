//! Signing scheme value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a file's signature is computed.
///
/// The scheme word is part of the embedded token, so a reader can tell which
/// canonicalization to apply without any outside knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningScheme {
    /// Every byte outside the signature slot is covered by the hash
    Full,
    /// Manual-section bodies are excluded from the hash
    Partial,
}

impl SigningScheme {
    /// Word that follows `@` in the signature token
    pub fn token_word(self) -> &'static str {
        match self {
            SigningScheme::Full => "generated",
            SigningScheme::Partial => "partially-generated",
        }
    }

    /// Inverse of [`SigningScheme::token_word`]
    pub fn from_token_word(word: &str) -> Option<Self> {
        match word {
            "generated" => Some(SigningScheme::Full),
            "partially-generated" => Some(SigningScheme::Partial),
            _ => None,
        }
    }

    /// Scheme a blob should be signed with, given how many manual sections it has
    pub fn for_section_count(count: usize) -> Self {
        if count == 0 {
            SigningScheme::Full
        } else {
            SigningScheme::Partial
        }
    }
}

impl fmt::Display for SigningScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningScheme::Full => write!(f, "full"),
            SigningScheme::Partial => write!(f, "partial"),
        }
    }
}

impl FromStr for SigningScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "generated" => Ok(SigningScheme::Full),
            "partial" | "partially-generated" => Ok(SigningScheme::Partial),
            other => Err(format!("unknown signing scheme '{}'", other)),
        }
    }
}
