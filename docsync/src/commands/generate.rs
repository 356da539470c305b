//! Generate command - fetches the documentation and writes the Kotlin model.

use crate::cli::Cli;
use crate::commands::load_config;
use crate::fetch::load_document;
use crate::output::write_atomically;
use docsync_core::{DocsyncConfig, Result, generate_model};
use std::path::PathBuf;
use tracing::info;

/// Runs the full generation pipeline.
pub fn run(cli: &Cli) -> Result<()> {
    info!("Starting Docsync model generation");

    let config = load_config(cli)?;
    let destination = destination(cli, &config);

    let html = load_document(cli.input.as_deref(), &config.source)?;
    let rendered = generate_model(&html, &config)?;
    write_atomically(&destination, &rendered)?;

    info!("Model generation completed successfully");
    Ok(())
}

/// `--output` wins over the configured path.
fn destination(cli: &Cli, config: &DocsyncConfig) -> PathBuf {
    cli.output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::ffi::OsStr;
    use std::fs;

    const PAGE: &str = r#"<div id="dev_page_content">
<h3>Available types</h3>
<h4>Dice</h4>
<p>This object represents an animated emoji that displays a random value.</p>
<table><tr><td>value</td><td>Integer</td><td>Value of the dice</td></tr></table>
</div>"#;

    #[test]
    fn test_output_flag_overrides_config() {
        let config = DocsyncConfig::default();

        let cli = Cli::try_parse_from(["docsync", "-o", "out/Model.kt"]).unwrap();
        assert_eq!(destination(&cli, &config), PathBuf::from("out/Model.kt"));

        let cli = Cli::try_parse_from(["docsync"]).unwrap();
        assert_eq!(destination(&cli, &config), PathBuf::from("model.kt"));
    }

    #[test]
    fn test_generate_from_local_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.html");
        let config_path = dir.path().join("docsync.toml");
        let output = dir.path().join("Model.kt");
        fs::write(&input, PAGE).unwrap();
        fs::write(&config_path, "[output]\npackage = \"org.example\"\n").unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("docsync"),
            OsStr::new("--config"),
            config_path.as_os_str(),
            OsStr::new("--input"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap();
        run(&cli).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("@file:Suppress(\"unused\")\n\npackage org.example\n"));
        assert!(written.contains("data class Dice(\n\n    /**\n     * Value of the dice\n     */\n    val value: Int\n)"));
        assert!(written.ends_with("interface InputMedia\n"));
    }

    #[test]
    fn test_failed_run_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("api.html");
        let config_path = dir.path().join("docsync.toml");
        let output = dir.path().join("Model.kt");
        fs::write(&input, "<div id=\"dev_page_content\"><h3>T</h3><h4>Message</h4><table><tr><td>media</td><td>Sticker, Video</td><td>x</td></tr></table></div>").unwrap();
        fs::write(&config_path, "").unwrap();
        fs::write(&output, "previous model").unwrap();

        let cli = Cli::try_parse_from([
            OsStr::new("docsync"),
            OsStr::new("--config"),
            config_path.as_os_str(),
            OsStr::new("--input"),
            input.as_os_str(),
            OsStr::new("--output"),
            output.as_os_str(),
        ])
        .unwrap();

        assert!(run(&cli).is_err());
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous model");
    }
}
