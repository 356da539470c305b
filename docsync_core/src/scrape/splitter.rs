use crate::document::{ContentNode, SECTION_HEADING_LEVEL};
use indexmap::IndexMap;
use tracing::debug;

/// Nodes grouped under the heading that precedes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingPartition {
    /// Nodes that appear before the first heading
    pub leading: Vec<ContentNode>,
    pub groups: Vec<(String, Vec<ContentNode>)>,
}

/// Assigns every node to the nearest preceding heading of `level`. Heading nodes
/// themselves are not part of any group; headings of other levels are ordinary
/// members.
pub fn partition_by_heading(nodes: Vec<ContentNode>, level: u8) -> HeadingPartition {
    let mut partition = HeadingPartition::default();

    for node in nodes {
        if let Some(text) = node.heading_text(level) {
            partition.groups.push((text.to_string(), Vec::new()));
            continue;
        }
        match partition.groups.last_mut() {
            Some((_, members)) => members.push(node),
            None => partition.leading.push(node),
        }
    }

    partition
}

/// Splits the container's nodes into major sections keyed by heading text, in
/// document order. Nodes before the first section heading are discarded; sections
/// that share a heading text are merged.
pub fn split_sections(nodes: Vec<ContentNode>) -> IndexMap<String, Vec<ContentNode>> {
    let partition = partition_by_heading(nodes, SECTION_HEADING_LEVEL);
    if !partition.leading.is_empty() {
        debug!(
            discarded = partition.leading.len(),
            "Discarding nodes before the first section heading"
        );
    }

    let mut sections: IndexMap<String, Vec<ContentNode>> = IndexMap::new();
    for (heading, members) in partition.groups {
        sections.entry(heading).or_default().extend(members);
    }

    debug!(section_count = sections.len(), "Split document into sections");
    sections
}
