//! radix-colors: command line front end for the Radix colors preset.
//!
//! Reads preset options from a TOML, YAML or JSON file and prints the
//! generated CSS, the extended theme, or a typography rule match.

mod cli;
mod commands;

use std::io::Write;
use std::process::ExitCode;

use tracing_subscriber::filter::{Directive, ParseError};
use tracing_subscriber::EnvFilter;

/// Default filter: `info` for every `radix*` target.
const DEFAULT_LOG_DIRECTIVE: &str = "radix=info";

/// Parse `--log-level`, or the default directive when none was given. A
/// filter that fails to parse falls back to the default and its error is
/// handed back so it can be reported once the subscriber is installed.
fn log_directive(level: Option<&str>) -> (Option<Directive>, Option<ParseError>) {
    let default = || DEFAULT_LOG_DIRECTIVE.parse().ok();
    match level {
        None => (default(), None),
        Some(level) => match level.parse() {
            Ok(directive) => (Some(directive), None),
            Err(e) => (default(), Some(e)),
        },
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (directive, rejected) = log_directive(args.log_level.as_deref());
    let filter = directive
        .into_iter()
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = rejected {
        tracing::warn!(
            filter = args.log_level.as_deref().unwrap_or_default(),
            error = %e,
            "invalid --log-level filter, using {DEFAULT_LOG_DIRECTIVE}"
        );
    }

    let result = match &args.command {
        cli::Command::Families => Ok(commands::families()),
        command => commands::load_options(args.config.as_deref(), args.strict)
            .and_then(|options| commands::run(command, options)),
    };

    match result {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{output}") {
                tracing::error!(error = %e, "failed to write output");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "radix-colors failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
