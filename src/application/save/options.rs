//! Save options

use std::path::PathBuf;

use crate::config::SaveConfig;
use crate::domain::entities::RekeyMap;

/// What to save: a fresh render and where its prior versions live
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Freshly rendered template text, signed or not
    pub template: String,
    /// File to write
    pub target: PathBuf,
    /// Older file names consulted before the target, in priority order
    pub legacy: Vec<PathBuf>,
    /// New key to old keys, for sections renamed between generations
    pub rekey: RekeyMap,
    /// Generator input named in an inserted header
    pub generated_from: Option<String>,
}

impl SaveRequest {
    pub fn new(target: impl Into<PathBuf>, template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            target: target.into(),
            legacy: Vec::new(),
            rekey: RekeyMap::new(),
            generated_from: None,
        }
    }

    /// Add a legacy path; earlier paths win over later ones
    pub fn with_legacy(mut self, path: impl Into<PathBuf>) -> Self {
        self.legacy.push(path.into());
        self
    }

    pub fn with_rekey(mut self, rekey: RekeyMap) -> Self {
        self.rekey = rekey;
        self
    }

    pub fn with_generated_from(mut self, source: Option<String>) -> Self {
        self.generated_from = source;
        self
    }
}

/// Options for the save command
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    /// Skip signature verification of prior content
    pub clobber: bool,
    /// Leave an existing target alone without reading it
    pub create_only: bool,
    /// Run everything except the final write
    pub dry_run: bool,
}

impl SaveOptions {
    /// Create new save options
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the `[save]` section of a config file
    pub fn from_config(config: &SaveConfig) -> Self {
        Self {
            clobber: config.clobber,
            create_only: config.create_only,
            dry_run: false,
        }
    }

    /// Set clobber
    pub fn with_clobber(mut self, clobber: bool) -> Self {
        self.clobber = clobber;
        self
    }

    /// Set create-only
    pub fn with_create_only(mut self, create_only: bool) -> Self {
        self.create_only = create_only;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
