//! Command handlers
//!
//! Each handler loads what it needs, runs one use case and renders the
//! result. A handler returns `Ok(false)` when the command ran but found
//! problems (a failed verification, broken markers).

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use stamped::config::{Config, ConfigWarning};
use stamped::presentation::logging::initialize_logging;
use stamped::presentation::{create_renderer, Cli, Commands, OutputFormat, ResultRenderer};

mod check;
mod save;
mod verify;

/// Everything a handler needs besides its own arguments
pub struct Context {
    pub config: Config,
    pub renderer: Box<dyn ResultRenderer>,
}

impl Context {
    pub fn stdout(&self) -> std::io::StdoutLock<'static> {
        std::io::stdout().lock()
    }
}

/// Name used in machine-readable output
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Save { .. } => "save",
        Commands::Verify { .. } => "verify",
        Commands::Check { .. } => "check",
    }
}

fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    let loaded = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => {
            let cwd = std::env::current_dir()?;
            Config::load_or_default(Some(&cwd))?
        }
    };
    Ok(loaded)
}

/// Load config, set up logging, then dispatch
pub fn run(cli: Cli) -> Result<bool> {
    let (config, warnings) = load_config(cli.config.as_deref())?;
    initialize_logging(cli.verbose, config.output.verbosity, cli.json)?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = Context {
        config,
        renderer: create_renderer(OutputFormat::from_json_flag(cli.json), cli.verbose),
    };

    let ok = match cli.command {
        Commands::Save {
            template,
            out,
            legacy,
            rekey,
            rekey_file,
            generated_from,
            clobber,
            create_only,
            dry_run,
            diff,
        } => save::cmd_save(
            &ctx,
            save::SaveArgs {
                template,
                out,
                legacy,
                rekey,
                rekey_file,
                generated_from,
                clobber,
                create_only,
                dry_run,
                diff,
            },
        )?,
        Commands::Verify {
            require_signed,
            paths,
        } => verify::cmd_verify(&ctx, &paths, require_signed)?,
        Commands::Check { paths } => check::cmd_check(&ctx, &paths)?,
    };

    ctx.stdout().flush()?;
    Ok(ok)
}
