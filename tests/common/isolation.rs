//! Isolation helpers for child processes.
//!
//! The user config lives under `dirs::config_dir()`, which follows `HOME`
//! and `XDG_CONFIG_HOME` on Unix and `APPDATA` on Windows. Pointing all of
//! them at a temp dir keeps a developer's own config out of the tests.

use std::path::Path;
use std::process::Command;

/// Environment variables that change save behaviour
pub const STAMPED_ENV_VARS: &[&str] = &[
    "STAMPED_ROOT",
    "STAMPED_CLOBBER",
    "STAMPED_CREATE_ONLY",
    "STAMPED_HEADER_STYLE",
    "STAMPED_VERBOSITY",
    "STAMPED_LOG",
];

pub trait IsolatedCommandExt {
    /// Use `home` as the home and config directory and clear `STAMPED_*`
    fn with_test_home(&mut self, home: &Path) -> &mut Self;
}

impl IsolatedCommandExt for Command {
    fn with_test_home(&mut self, home: &Path) -> &mut Self {
        for var in STAMPED_ENV_VARS {
            self.env_remove(var);
        }
        self.env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", home.join("AppData"))
    }
}
