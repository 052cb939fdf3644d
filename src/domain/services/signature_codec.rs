//! Signature codec
//!
//! Computes, embeds and validates the signature token that proves a file was
//! produced by the generator. The token lives in a doc comment near the top
//! of the file:
//!
//! ```text
//! @generated SignedSource<<2cf24dba...>>
//! @partially-generated SignedSource<<2cf24dba...>>
//! ```
//!
//! The hash covers the blob with the token's digest replaced by
//! [`SIGNATURE_PLACEHOLDER`], so it never depends on its own value. Under the
//! partial scheme manual-section bodies are emptied first, which keeps the
//! signature stable across hand edits inside those sections while any edit to
//! generated text or to the markers themselves still breaks it.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::domain::services::marker_scanner::{self, MarkerError};
use crate::domain::value_objects::{HeaderStyle, SignatureHash, SigningScheme};

/// Digest text used in unsigned slots and in every canonical form
pub const SIGNATURE_PLACEHOLDER: &str = "%%SIGNATURE%%";

/// Default first line of an inserted header
pub const DEFAULT_HEADER_MESSAGE: &str = "This file is generated. Do not modify it manually!";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(generated|partially-generated) SignedSource<<([^<>\r\n]*)>>").unwrap()
});

/// Location of the signature token in a blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureSlot {
    /// Scheme named by the token
    pub scheme: SigningScheme,
    /// Byte span of the whole token
    pub token: Range<usize>,
    /// Byte span of the digest between `<<` and `>>`
    pub hash: Range<usize>,
}

impl SignatureSlot {
    /// Slot for a freshly rendered token starting at `start`
    fn at(scheme: SigningScheme, start: usize, digest_len: usize) -> Self {
        let hash_start = start + token_prefix(scheme).len();
        Self {
            scheme,
            token: start..hash_start + digest_len + 2,
            hash: hash_start..hash_start + digest_len,
        }
    }
}

/// Outcome of verifying a blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verification {
    /// No signature token, or only an unsigned placeholder slot
    Unsigned,
    /// Token present but the recomputed hash does not match
    Invalid { scheme: SigningScheme },
    /// Recomputed hash matches
    Valid { scheme: SigningScheme },
}

impl Verification {
    pub fn is_valid(self) -> bool {
        matches!(self, Verification::Valid { .. })
    }

    pub fn is_signed(self) -> bool {
        !matches!(self, Verification::Unsigned)
    }

    /// Scheme named by the token, if there is one
    pub fn scheme(self) -> Option<SigningScheme> {
        match self {
            Verification::Unsigned => None,
            Verification::Invalid { scheme } | Verification::Valid { scheme } => Some(scheme),
        }
    }
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verification::Unsigned => write!(f, "unsigned"),
            Verification::Invalid { scheme } => write!(f, "invalid ({})", scheme),
            Verification::Valid { scheme } => write!(f, "valid ({})", scheme),
        }
    }
}

fn token_prefix(scheme: SigningScheme) -> String {
    format!("@{} SignedSource<<", scheme.token_word())
}

fn render_token(scheme: SigningScheme, digest: &str) -> String {
    format!("{}{}>>", token_prefix(scheme), digest)
}

/// Find the signature slot: the first token outside every manual section.
///
/// Token-like text inside a section body belongs to the user and is never
/// the slot. When the markers do not scan, every token is a candidate.
pub fn find_slot(text: &str) -> Option<SignatureSlot> {
    let sections = marker_scanner::scan(text).unwrap_or_default();
    TOKEN_RE.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        if sections
            .iter()
            .any(|s| s.span().contains(&whole.start()))
        {
            return None;
        }
        let scheme = SigningScheme::from_token_word(caps.get(1)?.as_str())?;
        Some(SignatureSlot {
            scheme,
            token: whole.range(),
            hash: caps.get(2)?.range(),
        })
    })
}

/// Canonical form hashed for `scheme`.
///
/// Fails under the partial scheme when the markers are malformed.
pub fn canonical_form(
    text: &str,
    slot: &SignatureSlot,
    scheme: SigningScheme,
) -> Result<String, MarkerError> {
    let mut canonical = String::with_capacity(text.len());
    canonical.push_str(&text[..slot.token.start]);
    canonical.push_str(&render_token(scheme, SIGNATURE_PLACEHOLDER));
    canonical.push_str(&text[slot.token.end..]);

    match scheme {
        SigningScheme::Full => Ok(canonical),
        SigningScheme::Partial => {
            let sections = marker_scanner::scan(&canonical)?;
            Ok(marker_scanner::blank_bodies(&canonical, &sections))
        }
    }
}

/// Verify a blob's embedded signature under whichever scheme its token names
pub fn verify(text: &str) -> Verification {
    let Some(slot) = find_slot(text) else {
        return Verification::Unsigned;
    };

    let recorded = &text[slot.hash.clone()];
    if recorded == SIGNATURE_PLACEHOLDER {
        return Verification::Unsigned;
    }

    let scheme = slot.scheme;
    match canonical_form(text, &slot, scheme) {
        Ok(canonical) if SignatureHash::of(&canonical).matches_str(recorded) => {
            Verification::Valid { scheme }
        }
        _ => Verification::Invalid { scheme },
    }
}

/// Signs blobs, inserting a header when the blob has no slot yet
#[derive(Debug, Clone)]
pub struct SignatureCodec {
    style: HeaderStyle,
    message: String,
    generated_from: Option<String>,
}

impl Default for SignatureCodec {
    fn default() -> Self {
        Self::new(HeaderStyle::default(), DEFAULT_HEADER_MESSAGE)
    }
}

impl SignatureCodec {
    pub fn new(style: HeaderStyle, message: impl Into<String>) -> Self {
        Self {
            style,
            message: message.into(),
            generated_from: None,
        }
    }

    /// Name the generator input in inserted headers
    pub fn with_generated_from(mut self, source: Option<String>) -> Self {
        self.generated_from = source;
        self
    }

    /// Sign `text` under `scheme`.
    ///
    /// Signing is a fixed point: signing already-signed text with the same
    /// scheme returns it unchanged.
    pub fn sign(&self, text: &str, scheme: SigningScheme) -> Result<String, MarkerError> {
        let (mut signed, slot) = match find_slot(text) {
            Some(slot) => (text.to_string(), slot),
            None => self.insert_header(text, scheme),
        };

        let canonical = canonical_form(&signed, &slot, scheme)?;
        let hash = SignatureHash::of(&canonical);
        signed.replace_range(slot.token, &render_token(scheme, hash.as_str()));
        Ok(signed)
    }

    fn header_lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.message.lines().collect();
        lines.push("");
        if let Some(source) = &self.generated_from {
            lines.push("Generated from:");
            lines.push(source);
            lines.push("");
        }
        lines
    }

    /// Insert an unsigned header at the top of `text`, after a shebang or
    /// open tag if the first line is one.
    fn insert_header(&self, text: &str, scheme: SigningScheme) -> (String, SignatureSlot) {
        let keeps_first_line = text.starts_with("#!") || text.starts_with("<?");
        let split = if keeps_first_line {
            text.find('\n').map_or(text.len(), |i| i + 1)
        } else {
            0
        };

        let prefix = self.style.line_prefix();
        let mut out = String::with_capacity(text.len() + 256);
        out.push_str(&text[..split]);
        if keeps_first_line && !out.ends_with('\n') {
            out.push('\n');
        }

        if let Some(open) = self.style.open() {
            out.push_str(open);
            out.push('\n');
        }
        for line in self.header_lines() {
            out.push_str(prefix);
            if !line.is_empty() {
                out.push(' ');
                out.push_str(line);
            }
            out.push('\n');
        }

        out.push_str(prefix);
        out.push(' ');
        let slot = SignatureSlot::at(scheme, out.len(), SIGNATURE_PLACEHOLDER.len());
        out.push_str(&render_token(scheme, SIGNATURE_PLACEHOLDER));
        out.push('\n');
        if let Some(close) = self.style.close() {
            out.push_str(close);
            out.push('\n');
        }

        out.push_str(&text[split..]);
        (out, slot)
    }
}
