//! Flattened view of the documentation page.
//!
//! The page is parsed with `html5ever` into an `RcDom`, then the direct children
//! of the content container are reduced to [`ContentNode`]s. Everything after this
//! module works on those nodes only, so the scraping logic never touches the DOM.

use crate::error::{DocsyncError, Result};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{debug, trace};

/// Heading level that opens a major section.
pub const SECTION_HEADING_LEVEL: u8 = 3;

/// Heading level that opens one type or method entry.
pub const ENTRY_HEADING_LEVEL: u8 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// Data rows only, each row being its cell texts
    Table(Vec<Vec<String>>),
    Other(String),
}

impl ContentNode {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentNode::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph(text.into())
    }

    pub fn table<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        ContentNode::Table(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Heading text if this node is a heading of exactly `level`.
    pub fn heading_text(&self, level: u8) -> Option<&str> {
        match self {
            ContentNode::Heading { level: l, text } if *l == level => Some(text),
            _ => None,
        }
    }
}

/// Parses `html` and returns the content nodes under the element with
/// `id == container_id`, in document order.
pub fn parse_content_nodes(html: &str, container_id: &str) -> Result<Vec<ContentNode>> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    let container = find_element_by_id(&dom.document, container_id).ok_or_else(|| {
        DocsyncError::MissingContainer {
            id: container_id.to_string(),
        }
    })?;

    let nodes: Vec<ContentNode> = container
        .children
        .borrow()
        .iter()
        .filter_map(to_content_node)
        .collect();

    debug!(
        container_id,
        node_count = nodes.len(),
        "Collected content nodes"
    );
    Ok(nodes)
}

fn find_element_by_id(root: &Handle, id: &str) -> Option<Handle> {
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if let NodeData::Element { attrs, .. } = &node.data {
            let matches = attrs
                .borrow()
                .iter()
                .any(|attr| &*attr.name.local == "id" && &*attr.value == id);
            if matches {
                return Some(node);
            }
        }
        // Reverse so the first child is visited first.
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

fn element_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

fn to_content_node(node: &Handle) -> Option<ContentNode> {
    match &node.data {
        NodeData::Element { name, .. } => {
            let tag = &*name.local;
            let content = match tag {
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    let level = tag[1..].parse().unwrap_or(ENTRY_HEADING_LEVEL);
                    ContentNode::heading(level, text_content(node))
                }
                "p" => ContentNode::Paragraph(text_content(node)),
                "table" => ContentNode::Table(table_rows(node)),
                _ => ContentNode::Other(text_content(node)),
            };
            trace!(tag, "Converted element");
            Some(content)
        }
        NodeData::Text { contents } => {
            let text = contents.borrow();
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| ContentNode::Other(trimmed.to_string()))
        }
        _ => None,
    }
}

/// Concatenated text of every descendant text node, trimmed.
fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().to_string()
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

/// Every `tr` under `table` that carries `td` cells. Header rows use `th` and are
/// skipped.
fn table_rows(table: &Handle) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut stack = vec![table.clone()];
    while let Some(node) = stack.pop() {
        if element_name(&node).as_deref() == Some("tr") {
            let cells: Vec<String> = node
                .children
                .borrow()
                .iter()
                .filter(|cell| element_name(cell).as_deref() == Some("td"))
                .map(text_content)
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
            continue;
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }
    rows
}
