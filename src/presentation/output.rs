//! Output Rendering
//!
//! Provides a unified interface for rendering results as text or JSON.

use std::io::{self, Write};
use std::path::Path;

use crate::application::{CheckResult, CheckStatus, SaveResult, VerifyResult};
use crate::domain::services::Resolution;
use crate::error::StampedError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Renders command results
pub trait ResultRenderer {
    fn save(&self, out: &mut dyn Write, result: &SaveResult, show_diff: bool) -> io::Result<()>;
    fn verify(&self, out: &mut dyn Write, result: &VerifyResult) -> io::Result<()>;
    fn check(&self, out: &mut dyn Write, result: &CheckResult) -> io::Result<()>;
    fn error(&self, out: &mut dyn Write, command: &str, err: &anyhow::Error) -> io::Result<()>;
}

/// Generate a unified diff between old and new content
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    similar::TextDiff::from_lines(old, new)
        .unified_diff()
        .header(
            &format!("a/{}", path.display()),
            &format!("b/{}", path.display()),
        )
        .to_string()
}

fn save_diff(result: &SaveResult) -> Option<String> {
    let new = result.content.as_deref()?;
    let old = result.previous.as_deref().unwrap_or("");
    Some(unified_diff(&result.path, old, new))
}

/// Text renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    /// Verbosity level
    pub verbose: u8,
}

impl ResultRenderer for TextRenderer {
    fn save(&self, out: &mut dyn Write, result: &SaveResult, show_diff: bool) -> io::Result<()> {
        let suffix = if result.is_change() && !result.written {
            " (dry run)"
        } else {
            ""
        };
        writeln!(out, "{} {}{}", result.outcome, result.path.display(), suffix)?;

        if self.verbose > 0 {
            for section in &result.sections {
                let how = match &section.resolution {
                    Resolution::Direct { origin } => format!("kept from {}", origin.display()),
                    Resolution::Rekeyed { old_key, origin } => {
                        format!("rekeyed from '{}' in {}", old_key, origin.display())
                    }
                    Resolution::New => "new".to_string(),
                };
                writeln!(out, "  {}: {}", section.key, how)?;
            }
        }
        for dropped in &result.dropped {
            writeln!(
                out,
                "  [!] dropped section '{}' from {}",
                dropped.key,
                dropped.origin.display()
            )?;
        }

        if show_diff {
            if let Some(diff) = save_diff(result) {
                write!(out, "{}", diff)?;
            }
        }
        Ok(())
    }

    fn verify(&self, out: &mut dyn Write, result: &VerifyResult) -> io::Result<()> {
        for item in &result.items {
            match (&item.verification, &item.error) {
                (Some(verification), _) => {
                    writeln!(out, "{:<20} {}", verification.to_string(), item.path.display())?
                }
                (None, error) => writeln!(
                    out,
                    "{:<20} {}: {}",
                    "error",
                    item.path.display(),
                    error.as_deref().unwrap_or("unreadable")
                )?,
            }
        }
        if self.verbose > 0 || result.items.len() > 1 {
            writeln!(
                out,
                "{} valid, {} invalid, {} unsigned, {} unreadable",
                result.valid, result.invalid, result.unsigned, result.errors
            )?;
        }
        Ok(())
    }

    fn check(&self, out: &mut dyn Write, result: &CheckResult) -> io::Result<()> {
        for item in &result.items {
            match item.status {
                CheckStatus::Pass => writeln!(
                    out,
                    "ok    {} ({} manual sections)",
                    item.path.display(),
                    item.sections
                )?,
                CheckStatus::Error => writeln!(
                    out,
                    "error {}",
                    item.message.as_deref().unwrap_or("invalid markers")
                )?,
            }
        }
        Ok(())
    }

    fn error(&self, out: &mut dyn Write, _command: &str, err: &anyhow::Error) -> io::Result<()> {
        writeln!(out, "Error: {}", err)
    }
}

/// JSON renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    writeln!(out, "{}", text)
}

impl ResultRenderer for JsonRenderer {
    fn save(&self, out: &mut dyn Write, result: &SaveResult, show_diff: bool) -> io::Result<()> {
        let mut json = serde_json::json!({
            "command": "save",
            "success": true,
            "result": result,
        });
        if show_diff {
            json["diff"] = serde_json::json!(save_diff(result));
        }
        write_json(out, &json)
    }

    fn verify(&self, out: &mut dyn Write, result: &VerifyResult) -> io::Result<()> {
        write_json(
            out,
            &serde_json::json!({
                "command": "verify",
                "result": result,
            }),
        )
    }

    fn check(&self, out: &mut dyn Write, result: &CheckResult) -> io::Result<()> {
        write_json(
            out,
            &serde_json::json!({
                "command": "check",
                "success": result.is_success(),
                "result": result,
            }),
        )
    }

    fn error(&self, out: &mut dyn Write, command: &str, err: &anyhow::Error) -> io::Result<()> {
        let (kind, path) = match err.downcast_ref::<StampedError>() {
            Some(e) => (e.kind(), e.path().map(|p| p.display().to_string())),
            None => ("internal", None),
        };
        write_json(
            out,
            &serde_json::json!({
                "command": command,
                "success": false,
                "error": {
                    "kind": kind,
                    "path": path,
                    "message": err.to_string(),
                },
            }),
        )
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8) -> Box<dyn ResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
