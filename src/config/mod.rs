//! Configuration module for Stamped
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (STAMPED_*)
//! 3. Project config (./stamped.toml)
//! 4. User config (~/.config/stamped/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{Config, GeneratorConfig, OutputConfig, SaveConfig, SignatureConfig, Verbosity};
