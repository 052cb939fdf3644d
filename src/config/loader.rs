//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, HeaderStyle};
use crate::error::{StampedError, StampedResult};

use super::types::{Config, Verbosity};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "stamped.toml";

/// User config file, relative to the platform config directory
pub const USER_CONFIG_FILE: &str = "stamped/config.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> StampedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| StampedError::Fs {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| StampedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// A config file that exists but does not parse is an error; a missing one
/// falls through to the next level.
pub fn load_or_default(project_root: Option<&Path>) -> StampedResult<(Config, Vec<ConfigWarning>)> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            let (config, warnings) = load_with_warnings(&project_config)?;
            tracing::debug!(path = %project_config.display(), "loaded project config");
            return Ok((with_env_overrides(config), warnings));
        }
    }

    if let Some(user_config) = dirs::config_dir().map(|d| d.join(USER_CONFIG_FILE)) {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            tracing::debug!(path = %user_config.display(), "loaded user config");
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (STAMPED_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // STAMPED_ROOT
    if let Ok(root) = std::env::var("STAMPED_ROOT") {
        if !root.is_empty() {
            config.generator.root = Some(PathBuf::from(root));
        }
    }

    // STAMPED_CLOBBER
    if let Ok(val) = std::env::var("STAMPED_CLOBBER") {
        config.save.clobber = env_flag(&val);
    }

    // STAMPED_CREATE_ONLY
    if let Ok(val) = std::env::var("STAMPED_CREATE_ONLY") {
        config.save.create_only = env_flag(&val);
    }

    // STAMPED_HEADER_STYLE
    if let Ok(style) = std::env::var("STAMPED_HEADER_STYLE") {
        match style.parse::<HeaderStyle>() {
            Ok(style) => config.signature.header_style = style,
            Err(e) => tracing::warn!("ignoring STAMPED_HEADER_STYLE: {}", e),
        }
    }

    // STAMPED_VERBOSITY
    if let Ok(verbosity) = std::env::var("STAMPED_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn env_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    !(val.is_empty() || val == "false" || val == "0")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "generator",
        "root",
        "signature",
        "header_style",
        "header_message",
        "save",
        "clobber",
        "create_only",
        "warn_dropped_sections",
        "output",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
