//! Command-line interface definitions for Docsync.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Docsync - regenerates the Kotlin bot API model from the published documentation
#[derive(Parser, Debug)]
#[command(name = "docsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to docsync.toml configuration file
    #[arg(short, long, global = true, env = "DOCSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output path override (overrides config file)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Read the documentation page from a local HTML file instead of fetching it
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the documentation and write the Kotlin model (default)
    Generate,

    /// Display the extracted model without writing anything
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}

impl Cli {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = Cli::try_parse_from(["docsync"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.default_log_filter(), "info");
    }

    #[test]
    fn test_verbosity_levels() {
        let cli = Cli::try_parse_from(["docsync", "-v"]).unwrap();
        assert_eq!(cli.default_log_filter(), "debug");

        let cli = Cli::try_parse_from(["docsync", "-vv", "generate"]).unwrap();
        assert_eq!(cli.default_log_filter(), "trace");
        assert!(matches!(cli.command, Some(Commands::Generate)));

        let cli = Cli::try_parse_from(["docsync", "--quiet"]).unwrap();
        assert_eq!(cli.default_log_filter(), "error");
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docsync",
            "info",
            "--format",
            "json",
            "--input",
            "api.html",
            "-o",
            "Model.kt",
        ])
        .unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("api.html")));
        assert_eq!(cli.output, Some(PathBuf::from("Model.kt")));
        match cli.command {
            Some(Commands::Info(args)) => assert_eq!(args.format, InfoFormat::Json),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
