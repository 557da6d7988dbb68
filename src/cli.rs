use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Format of `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML, as written in `.header-guard.toml`
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "header-guard")]
#[command(author, version, about = "Header guard - enforce a copyright header on every source file")]
#[command(long_about = "Checks that every source file starts with the configured copyright header.\n\n\
    Exit codes:\n  \
    0 - All headers match (or were too short to judge)\n  \
    1 - Header mismatches found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check file headers against the template
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),

    /// Print the expected header after substitution
    Explain(ExplainArgs),
}

#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copyright owner substituted for OWNER (overrides config)
    #[arg(long)]
    pub owner: Option<String>,

    /// Require the current year instead of any four-digit year
    #[arg(long)]
    pub force_current_year: bool,

    /// Read the header template from this file (overrides config)
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// File extensions to check (comma-separated, e.g., php,phtml)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Do not honour .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Output format [possible values: text, json, sarif]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only warn, don't fail on header mismatches
    #[arg(long)]
    pub warn_only: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".header-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".header-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigFormat,
    },
}

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copyright owner substituted for OWNER (overrides config)
    #[arg(long)]
    pub owner: Option<String>,

    /// Substitute the current year for YYYY
    #[arg(long)]
    pub force_current_year: bool,

    /// Read the header template from this file (overrides config)
    #[arg(long)]
    pub template_file: Option<PathBuf>,

    /// Also print the token stream the header is compared by
    #[arg(long)]
    pub tokens: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
