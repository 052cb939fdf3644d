//! Stamped CLI - signed source regeneration
//!
//! Usage: stamped <COMMAND>
//!
//! Commands:
//!   save    Sign a rendered template and write it, keeping manual sections
//!   verify  Check embedded signatures
//!   check   Validate manual-section markers

use std::process::ExitCode;

use clap::Parser;

use stamped::presentation::{create_renderer, Cli, OutputFormat};

mod commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);
    let verbose = cli.verbose;
    let command = commands::command_name(&cli.command);

    match commands::run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let renderer = create_renderer(format, verbose);
            let written = if format == OutputFormat::Json {
                renderer.error(&mut std::io::stdout().lock(), command, &err)
            } else {
                renderer.error(&mut std::io::stderr().lock(), command, &err)
            };
            if written.is_err() {
                eprintln!("Error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}
