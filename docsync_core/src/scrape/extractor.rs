//! Turns one section's nodes into raw [`TypeRecord`]s.
//!
//! Every entry heading opens a record. Paragraphs under it become documentation,
//! and each table row becomes a [`FieldRecord`]. The two entry kinds use different
//! table layouts:
//!
//! | kind   | columns                                     |
//! |--------|---------------------------------------------|
//! | type   | name, type, description                     |
//! | method | name, type, required/optional, description  |
//!
//! Type entries mark optional fields with an `Optional. ` description prefix,
//! which is stripped from the stored description.

use crate::document::{ContentNode, ENTRY_HEADING_LEVEL};
use crate::error::{DocsyncError, Result};
use crate::scrape::splitter::partition_by_heading;
use crate::types::{EntryKind, FieldRecord, TypeRecord};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Description prefix that marks a field as optional.
pub const OPTIONAL_PREFIX: &str = "Optional. ";

/// Marker in the method table's third column.
const OPTIONAL_MARKER: &str = "Optional";

/// Records extracted from one section plus the headings that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<TypeRecord>,
    pub rejected_headings: Vec<String>,
}

/// Extracts every entry in `section`. Empty headings and headings containing
/// whitespace are not entry names (icon-only anchors, changelog dates); they are
/// logged, reported in [`Extraction::rejected_headings`] and skipped while the
/// rest of the section is still processed.
pub fn extract_entries(section: Vec<ContentNode>) -> Result<Extraction> {
    let partition = partition_by_heading(section, ENTRY_HEADING_LEVEL);
    if !partition.leading.is_empty() {
        debug!(
            discarded = partition.leading.len(),
            "Discarding section nodes before the first entry heading"
        );
    }

    let mut extraction = Extraction::default();
    for (heading, nodes) in partition.groups {
        if let Err(err) = check_entry_heading(&heading) {
            if !err.is_recoverable() {
                return Err(err);
            }
            warn!("Skipping entry: {}", err);
            extraction.rejected_headings.push(heading);
            continue;
        }
        extraction.records.push(build_record(&heading, nodes)?);
    }

    Ok(extraction)
}

/// An entry name is a single non-empty token.
fn check_entry_heading(heading: &str) -> Result<()> {
    if heading.is_empty() || heading.chars().any(char::is_whitespace) {
        return Err(DocsyncError::malformed_entry_heading(heading));
    }
    Ok(())
}

fn build_record(heading: &str, nodes: Vec<ContentNode>) -> Result<TypeRecord> {
    let mut record = TypeRecord::from_heading(heading);
    let mut seen_fields = HashSet::new();

    for node in nodes {
        match node {
            ContentNode::Paragraph(text) => record.documentation.push(text),
            ContentNode::Table(rows) => {
                for row in rows {
                    let Some(field) = parse_row(record.kind, &row) else {
                        warn!(record = %record.name, ?row, "Skipping table row with too few cells");
                        continue;
                    };
                    if !seen_fields.insert(field.raw_name.clone()) {
                        return Err(DocsyncError::duplicate_definition(format!(
                            "field `{}` appears twice in {}",
                            field.raw_name, record.name
                        )));
                    }
                    record.fields.push(field);
                }
            }
            ContentNode::Heading { .. } | ContentNode::Other(_) => {}
        }
    }

    debug!(
        record = %record.name,
        kind = ?record.kind,
        fields = record.fields.len(),
        paragraphs = record.documentation.len(),
        "Extracted entry"
    );
    Ok(record)
}

fn parse_row(kind: EntryKind, row: &[String]) -> Option<FieldRecord> {
    if row.len() < 2 {
        return None;
    }
    let cell = |idx: usize| row.get(idx).map(String::as_str).unwrap_or_default();

    let (raw_description, required_column) = match kind {
        EntryKind::Type => (cell(2), None),
        EntryKind::Method => (cell(3), Some(cell(2))),
    };

    let (description, prefixed_optional) = match raw_description.strip_prefix(OPTIONAL_PREFIX) {
        Some(rest) => (rest, true),
        None => (raw_description, false),
    };
    let column_optional = required_column.is_some_and(|text| text.contains(OPTIONAL_MARKER));

    Some(FieldRecord {
        raw_name: cell(0).to_string(),
        raw_type: cell(1).to_string(),
        description: description.to_string(),
        optional: prefixed_optional || column_optional,
    })
}
