//! Command handlers for the Docsync CLI.

pub mod generate;
pub mod info;

use crate::cli::Cli;
use docsync_core::{DocsyncConfig, Result};
use tracing::{error, info};

/// Loads the configuration named on the command line, or searches for one.
pub(crate) fn load_config(cli: &Cli) -> Result<DocsyncConfig> {
    match DocsyncConfig::load(cli.config.as_deref()) {
        Ok(config) => {
            info!("Configuration loaded successfully");
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
