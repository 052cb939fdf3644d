//! RekeyMap entity - where to look for a renamed section's old content
//!
//! Maps a new section key to an ordered list of old keys. When the new key
//! has no direct match in any prior source, the old keys are tried in order
//! and the first one found wins.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{StampedError, StampedResult};

/// New key → ordered candidate old keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RekeyMap {
    aliases: BTreeMap<String, Vec<String>>,
}

/// On-disk rekey file (`[rekey]` table)
#[derive(Debug, Deserialize)]
struct RekeyFile {
    #[serde(default)]
    rekey: RekeyMap,
}

impl RekeyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register old-key aliases for a new key, replacing any earlier entry
    pub fn insert(&mut self, new_key: impl Into<String>, old_keys: Vec<String>) {
        self.aliases.insert(new_key.into(), old_keys);
    }

    /// Builder form of [`RekeyMap::insert`]
    pub fn with(mut self, new_key: impl Into<String>, old_keys: &[&str]) -> Self {
        self.insert(new_key, old_keys.iter().map(|k| k.to_string()).collect());
        self
    }

    /// Old keys to try for `new_key`, in priority order
    pub fn aliases(&self, new_key: &str) -> &[String] {
        self.aliases
            .get(new_key)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Merge another map into this one; entries in `other` win
    pub fn extend(&mut self, other: RekeyMap) {
        self.aliases.extend(other.aliases);
    }

    /// Parse a `NEW=OLD1,OLD2` entry
    pub fn parse_entry(entry: &str) -> StampedResult<(String, Vec<String>)> {
        let invalid = || StampedError::InvalidRekey {
            entry: entry.to_string(),
        };

        let (new_key, old_keys) = entry.split_once('=').ok_or_else(invalid)?;
        let new_key = new_key.trim();
        if new_key.is_empty() {
            return Err(invalid());
        }

        let old_keys: Vec<String> = old_keys
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        if old_keys.is_empty() {
            return Err(invalid());
        }

        Ok((new_key.to_string(), old_keys))
    }

    /// Build a map from CLI-style entries
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> StampedResult<Self> {
        let mut map = Self::new();
        for entry in entries {
            let (new_key, old_keys) = Self::parse_entry(entry.as_ref())?;
            map.insert(new_key, old_keys);
        }
        Ok(map)
    }

    /// Parse the `[rekey]` table of a TOML rekey file
    pub fn from_toml_str(content: &str, file: &Path) -> StampedResult<Self> {
        let parsed: RekeyFile =
            toml::from_str(content).map_err(|e| StampedError::InvalidConfig {
                file: file.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(parsed.rekey)
    }
}
