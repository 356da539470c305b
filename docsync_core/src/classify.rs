use crate::tables::InterfaceIndex;
use crate::types::{DeclarationKind, ResolvedType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Resolved declarations with interface relations filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedModel {
    /// Extracted declarations in document order
    pub types: Vec<ResolvedType>,
    /// Interfaces with no extracted declaration, in table order
    pub stubs: Vec<ResolvedType>,
}

/// Attaches each type to the interface the table lists it under and collects
/// the interfaces that need a stub declaration.
///
/// A declaration whose own name is an interface is rendered as that interface.
/// Interfaces are matched by name against the extracted declarations, so an
/// interface with members but no declaration of its own still gets a stub.
pub fn classify(mut types: Vec<ResolvedType>, index: &InterfaceIndex) -> ClassifiedModel {
    for resolved in &mut types {
        if index.is_interface(&resolved.name) {
            resolved.kind = DeclarationKind::Interface;
        }
        if let Some(interface) = index.supertype_of(&resolved.name) {
            debug!(type_name = %resolved.name, interface, "Type implements interface");
            resolved.supertype = Some(interface.to_string());
        }
    }

    let declared: HashSet<&str> = types.iter().map(|t| t.name.as_str()).collect();
    let stubs: Vec<ResolvedType> = index
        .groups()
        .iter()
        .filter(|group| !declared.contains(group.name))
        .map(|group| ResolvedType::interface_stub(group.name))
        .collect();

    info!(
        type_count = types.len(),
        implementer_count = types.iter().filter(|t| t.supertype.is_some()).count(),
        stub_count = stubs.len(),
        "Classified interface membership"
    );

    ClassifiedModel { types, stubs }
}
