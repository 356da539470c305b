//! The full documentation-to-Kotlin run.
//!
//! Every stage consumes the previous stage's output completely before the next
//! one starts, and the rendered text is only returned once all stages have
//! succeeded.

use crate::classify::{ClassifiedModel, classify};
use crate::config::{DocsyncConfig, SourceConfig};
use crate::document::parse_content_nodes;
use crate::error::{DocsyncError, Result};
use crate::resolve::TypeResolver;
use crate::scrape::{extract_entries, split_sections};
use crate::tables::{ENUMS, InterfaceIndex};
use crate::types::TypeRecord;
use crate::typesync::generate_kotlin_model_string;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Everything known about the page after classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentModel {
    pub classified: ClassifiedModel,
    /// Entry headings that were skipped because they are not single tokens
    pub rejected_headings: Vec<String>,
}

/// Parses, splits, extracts, resolves and classifies `html`.
pub fn build_model(html: &str, source: &SourceConfig) -> Result<DocumentModel> {
    let nodes = parse_content_nodes(html, &source.container_id)?;
    let sections = split_sections(nodes);
    info!(section_count = sections.len(), "Split documentation into sections");

    let mut records = Vec::new();
    let mut rejected_headings = Vec::new();
    for (heading, section) in sections {
        let extraction = extract_entries(section)?;
        debug!(
            section = %heading,
            records = extraction.records.len(),
            rejected = extraction.rejected_headings.len(),
            "Extracted section"
        );
        records.extend(extraction.records);
        rejected_headings.extend(extraction.rejected_headings);
    }
    ensure_unique_names(&records)?;
    info!(
        record_count = records.len(),
        rejected_count = rejected_headings.len(),
        "Extracted entries"
    );

    let resolved = TypeResolver::standard().resolve_all(records)?;
    let classified = classify(resolved, InterfaceIndex::standard());

    Ok(DocumentModel {
        classified,
        rejected_headings,
    })
}

/// Runs the whole pipeline and returns the rendered Kotlin source.
pub fn generate_model(html: &str, config: &DocsyncConfig) -> Result<String> {
    let model = build_model(html, &config.source)?;
    Ok(generate_kotlin_model_string(
        &model.classified,
        ENUMS,
        &config.output,
    ))
}

fn ensure_unique_names(records: &[TypeRecord]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.name.as_str()) {
            return Err(DocsyncError::duplicate_definition(format!(
                "type `{}` is declared more than once",
                record.name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_type_names_are_rejected() {
        let records = vec![
            TypeRecord::from_heading("sendMessage"),
            TypeRecord::from_heading("SendMessageRequest"),
        ];
        let err = ensure_unique_names(&records).unwrap_err();
        assert!(matches!(err, DocsyncError::DuplicateDefinition(msg) if msg.contains("SendMessageRequest")));
    }

    #[test]
    fn test_distinct_names_pass() {
        let records = vec![TypeRecord::from_heading("getMe"), TypeRecord::from_heading("User")];
        assert!(ensure_unique_names(&records).is_ok());
    }

    #[test]
    fn test_missing_container_aborts_before_extraction() {
        let err = build_model("<html><body><p>moved</p></body></html>", &SourceConfig::default()).unwrap_err();
        assert!(matches!(err, DocsyncError::MissingContainer { .. }));
    }
}
