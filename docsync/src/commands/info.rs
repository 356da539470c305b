//! Info command - displays the extracted model and configuration.

use crate::cli::{Cli, InfoArgs, InfoFormat};
use crate::commands::load_config;
use crate::fetch::load_document;
use docsync_core::types::DeclarationKind;
use docsync_core::{DocsyncConfig, DocumentModel, Result, build_model};
use serde_json::json;

/// Runs the info command.
pub fn run(cli: &Cli, args: InfoArgs) -> Result<()> {
    let config = load_config(cli)?;
    let html = load_document(cli.input.as_deref(), &config.source)?;
    let model = build_model(&html, &config.source)?;

    let report = match args.format {
        InfoFormat::Pretty => render_pretty(&config, &model)?,
        InfoFormat::Json => render_json(&config, &model)?,
    };
    println!("{}", report);
    Ok(())
}

fn kind_label(kind: DeclarationKind) -> &'static str {
    match kind {
        DeclarationKind::Interface => "interface",
        DeclarationKind::Record => "data class",
        DeclarationKind::Marker => "class",
    }
}

fn render_pretty(config: &DocsyncConfig, model: &DocumentModel) -> Result<String> {
    let mut out = String::new();
    let types = &model.classified.types;

    out.push_str("=== Configuration ===\n\n");
    out.push_str(&toml::to_string_pretty(config)?);

    out.push_str("\n=== Declarations ===\n\n");
    out.push_str(&format!("Total: {} declarations\n\n", types.len()));
    for declaration in types {
        out.push_str(&format!(
            "  - {} ({}, {} fields)",
            declaration.name,
            kind_label(declaration.kind),
            declaration.fields.len()
        ));
        if let Some(supertype) = &declaration.supertype {
            out.push_str(&format!(" : {}", supertype));
        }
        out.push('\n');
    }

    if !model.classified.stubs.is_empty() {
        out.push_str(&format!("\nStub interfaces ({}):\n", model.classified.stubs.len()));
        for stub in &model.classified.stubs {
            out.push_str(&format!("  - {}\n", stub.name));
        }
    }

    if !model.rejected_headings.is_empty() {
        out.push_str(&format!("\nSkipped headings ({}):\n", model.rejected_headings.len()));
        for heading in &model.rejected_headings {
            out.push_str(&format!("  - {:?}\n", heading));
        }
    }

    Ok(out.trim_end().to_string())
}

fn render_json(config: &DocsyncConfig, model: &DocumentModel) -> Result<String> {
    let declarations: Vec<_> = model
        .classified
        .types
        .iter()
        .map(|declaration| {
            json!({
                "name": declaration.name,
                "kind": declaration.kind,
                "supertype": declaration.supertype,
                "fields": declaration.fields.len(),
            })
        })
        .collect();
    let stubs: Vec<&str> = model
        .classified
        .stubs
        .iter()
        .map(|stub| stub.name.as_str())
        .collect();

    let report = json!({
        "config": config,
        "declarations": declarations,
        "stubs": stubs,
        "rejected_headings": model.rejected_headings,
    });
    Ok(serde_json::to_string_pretty(&report)?)
}
