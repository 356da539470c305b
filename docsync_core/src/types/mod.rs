mod type_expr;

pub use crate::types::type_expr::TypeExpr;
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};

/// Suffix appended to method entries so they read as request payload types.
pub const REQUEST_SUFFIX: &str = "Request";

/// Whether a documentation entry describes a type or a method.
///
/// The two kinds lay out their field tables differently, see
/// [`crate::scrape::extractor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Type,
    Method,
}

impl EntryKind {
    /// Methods are documented under lowercase headings (`getUpdates`), types under
    /// capitalized ones (`Update`).
    pub fn of(heading: &str) -> Self {
        if heading.chars().next().is_some_and(char::is_lowercase) {
            EntryKind::Method
        } else {
            EntryKind::Type
        }
    }
}

/// Rewrites a method heading into its request type name: `getUpdates` becomes
/// `GetUpdatesRequest`. Type headings are returned unchanged.
pub fn declared_name(heading: &str) -> String {
    match EntryKind::of(heading) {
        EntryKind::Type => heading.to_string(),
        EntryKind::Method => {
            let mut chars = heading.chars();
            let mut name: String = chars
                .next()
                .map(|first| first.to_uppercase().collect())
                .unwrap_or_default();
            name.push_str(chars.as_str());
            name.push_str(REQUEST_SUFFIX);
            name
        }
    }
}

/// One row of a field table, before type resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRecord {
    pub raw_name: String,
    pub raw_type: String,
    pub description: String,
    pub optional: bool,
}

impl FieldRecord {
    /// Words are split on underscores only, so digits never start a new word.
    pub fn camel_name(&self) -> String {
        self.raw_name.from_case(Case::Snake).to_case(Case::Camel)
    }
}

/// One extracted documentation entry, before type resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    /// Declared name, already rewritten for method entries
    pub name: String,
    pub kind: EntryKind,
    /// Documentation paragraphs in document order
    pub documentation: Vec<String>,
    pub fields: Vec<FieldRecord>,
}

impl TypeRecord {
    /// Creates an empty record for the entry under `heading`. The request rewrite
    /// happens here and nowhere else.
    pub fn from_heading(heading: &str) -> Self {
        Self {
            name: declared_name(heading),
            kind: EntryKind::of(heading),
            documentation: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn is_marker(&self) -> bool {
        self.fields.is_empty()
    }
}

/// How a declaration is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Interface,
    Record,
    Marker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedField {
    /// camelCase field name
    pub name: String,
    pub field_type: TypeExpr,
    pub description: String,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedType {
    pub name: String,
    pub documentation: Vec<String>,
    pub fields: Vec<ResolvedField>,
    pub kind: DeclarationKind,
    /// Interface this type implements, if any
    pub supertype: Option<String>,
}

impl ResolvedType {
    /// A member-less interface declaration for an interface nothing implements.
    pub fn interface_stub(name: &str) -> Self {
        Self {
            name: name.to_string(),
            documentation: Vec::new(),
            fields: Vec::new(),
            kind: DeclarationKind::Interface,
            supertype: None,
        }
    }
}
