use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// radix-colors: generate Radix color CSS variables and theme tokens.
#[derive(Parser, Debug)]
#[command(name = "radix-colors", version, about)]
pub struct Args {
    /// Options file (TOML, YAML or JSON). Defaults to ./radix-colors.toml,
    /// then the user config directory.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. debug, radix_preset=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Fail on unknown colors and invalid option values.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the preflight CSS.
    Css,
    /// Print the extended theme as JSON.
    Theme {
        /// Existing theme JSON to extend.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the CSS for a dynamic rule match (e.g. prose-radix-blue).
    Rule {
        /// Utility name to match.
        selector: String,
    },
    /// List the available color families.
    Families,
}

pub fn parse() -> Args {
    Args::parse()
}
