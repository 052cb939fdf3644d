//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{SignatureCodec, DEFAULT_HEADER_MESSAGE};
use crate::domain::value_objects::{ConfigWarning, HeaderStyle};
use crate::error::StampedResult;

use super::loader;

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Directory relative target and legacy paths are resolved against
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// Signature header configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureConfig {
    #[serde(default)]
    pub header_style: HeaderStyle,

    #[serde(default = "default_header_message")]
    pub header_message: String,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            header_style: HeaderStyle::default(),
            header_message: default_header_message(),
        }
    }
}

fn default_header_message() -> String {
    DEFAULT_HEADER_MESSAGE.to_string()
}

/// Save behaviour defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Skip signature verification of prior content
    #[serde(default)]
    pub clobber: bool,

    /// Never touch a target that already exists
    #[serde(default)]
    pub create_only: bool,

    /// Log prior manual sections that no longer have a home
    #[serde(default = "default_true")]
    pub warn_dropped_sections: bool,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            clobber: false,
            create_only: false,
            warn_dropped_sections: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub signature: SignatureConfig,

    #[serde(default)]
    pub save: SaveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> StampedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> StampedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> StampedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (STAMPED_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolve a target or legacy path against the configured root
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.generator.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Codec configured with this header style and message
    pub fn signature_codec(&self) -> SignatureCodec {
        SignatureCodec::new(
            self.signature.header_style,
            self.signature.header_message.clone(),
        )
    }
}
