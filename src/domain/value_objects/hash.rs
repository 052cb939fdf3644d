//! Signature Hash Value Object
//!
//! The digest embedded in a signature token. Always the lowercase SHA-256 hex
//! of a blob's canonical form.

use std::fmt;

use sha2::{Digest, Sha256};

/// Signature hash value object
///
/// Unlike lockfile-style hashes this carries no algorithm prefix: the token
/// syntax already fixes the algorithm, and the hex digest is what gets
/// spliced between `SignedSource<<` and `>>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureHash(String);

impl SignatureHash {
    /// Number of hex characters in a digest
    pub const HEX_LEN: usize = 64;

    /// Compute the hash of a canonical form
    pub fn of(canonical: &str) -> Self {
        let digest = Sha256::digest(canonical.as_bytes());
        Self(format!("{:x}", digest))
    }

    /// Get the hex digest
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare against the raw text found in a signature slot
    pub fn matches_str(&self, s: &str) -> bool {
        self.0 == s
    }
}

impl fmt::Display for SignatureHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SignatureHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
