mod cli;
mod commands;
mod fetch;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Before parsing, so `.env` can also provide DOCSYNC_CONFIG and RUST_LOG
    let env_file = dotenv::dotenv().ok();
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v / -q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?env_file, "Environment variables loaded from .env if present");
    debug!(?cli, "Parsed command line");

    let result = match &cli.command {
        None | Some(Commands::Generate) => commands::generate::run(&cli),
        Some(Commands::Info(args)) => commands::info::run(&cli, args.clone()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
