//! Resolution of free-text type descriptors into [`TypeExpr`]s.
//!
//! Rules are tried in a fixed order and the first match wins:
//!
//! 1. override for `(owning type, field)`
//! 2. global override for the field name
//! 3. `Array of X` unwrapping, recursively
//! 4. `A or B` unions: anything mentioning `Markup` becomes the markup interface,
//!    otherwise the first alternative is kept
//! 5. comma lists: anything mentioning `InputMedia` becomes the input media
//!    interface, otherwise resolution fails
//! 6. primitive mapping (`Integer`, `True`, `Float number`), everything else is a
//!    named reference

use crate::error::{DocsyncError, Result};
use crate::tables::{INPUT_MEDIA_INTERFACE, MARKUP_INTERFACE, OverrideIndex};
use crate::types::{DeclarationKind, FieldRecord, ResolvedField, ResolvedType, TypeExpr, TypeRecord};
use once_cell::sync::Lazy;
use tracing::{debug, trace};

pub const ARRAY_PREFIX: &str = "Array of";

/// Deepest `Array of` nesting accepted from the document.
pub const MAX_ARRAY_DEPTH: usize = 8;

const UNION_SEPARATOR: &str = " or ";
const LIST_SEPARATOR: char = ',';

const INTEGER: &str = "Integer";
const TRUE: &str = "True";
const FLOAT_NUMBER: &str = "Float number";

/// Field names ending in this (case-insensitive) hold chat identifiers, which do
/// not fit in 32 bits.
const CHAT_ID_SUFFIX: &str = "chatid";

/// The field a descriptor belongs to, for rules and error messages.
struct FieldContext<'a> {
    owner: &'a str,
    field_name: &'a str,
    description: &'a str,
    raw_type: &'a str,
}

#[derive(Debug, Clone)]
pub struct TypeResolver {
    overrides: &'static OverrideIndex,
}

static STANDARD_RESOLVER: Lazy<TypeResolver> = Lazy::new(|| TypeResolver::new(OverrideIndex::standard()));

impl TypeResolver {
    pub fn new(overrides: &'static OverrideIndex) -> Self {
        Self { overrides }
    }

    /// Resolver over the built-in override table.
    pub fn standard() -> &'static TypeResolver {
        &STANDARD_RESOLVER
    }

    /// Resolves every record in order, stopping at the first failure.
    pub fn resolve_all(&self, records: Vec<TypeRecord>) -> Result<Vec<ResolvedType>> {
        let resolved = records
            .into_iter()
            .map(|record| self.resolve_record(record))
            .collect::<Result<Vec<_>>>()?;
        debug!(type_count = resolved.len(), "Resolved all field types");
        Ok(resolved)
    }

    pub fn resolve_record(&self, record: TypeRecord) -> Result<ResolvedType> {
        let fields = record
            .fields
            .iter()
            .map(|field| {
                Ok(ResolvedField {
                    name: field.camel_name(),
                    field_type: self.resolve_field(&record.name, field)?,
                    description: field.description.clone(),
                    optional: field.optional,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let kind = if fields.is_empty() {
            DeclarationKind::Marker
        } else {
            DeclarationKind::Record
        };

        Ok(ResolvedType {
            name: record.name,
            documentation: record.documentation,
            fields,
            kind,
            supertype: None,
        })
    }

    /// Resolves one field of the type named `owner`.
    pub fn resolve_field(&self, owner: &str, field: &FieldRecord) -> Result<TypeExpr> {
        let field_name = field.camel_name();

        if let Some(type_name) = self.overrides.for_type(owner, &field_name) {
            trace!(owner, field = %field_name, type_name, "Applied type override");
            return Ok(TypeExpr::named(type_name));
        }
        if let Some(type_name) = self.overrides.global(&field_name) {
            trace!(owner, field = %field_name, type_name, "Applied global override");
            return Ok(TypeExpr::named(type_name));
        }

        let ctx = FieldContext {
            owner,
            field_name: &field_name,
            description: &field.description,
            raw_type: &field.raw_type,
        };
        resolve_descriptor(&field.raw_type, &ctx, 0)
    }
}

fn resolve_descriptor(descriptor: &str, ctx: &FieldContext<'_>, depth: usize) -> Result<TypeExpr> {
    let descriptor = descriptor.trim();

    if let Some(element) = strip_array_prefix(descriptor) {
        if element.is_empty() || depth >= MAX_ARRAY_DEPTH {
            return Err(DocsyncError::UnboundedArrayNesting {
                type_name: ctx.owner.to_string(),
                field: ctx.field_name.to_string(),
                descriptor: ctx.raw_type.to_string(),
                max_depth: MAX_ARRAY_DEPTH,
            });
        }
        return Ok(TypeExpr::list(resolve_descriptor(element, ctx, depth + 1)?));
    }

    let mut descriptor = descriptor;

    if descriptor.contains(UNION_SEPARATOR) {
        let mut alternatives = descriptor.split(UNION_SEPARATOR).map(str::trim);
        if descriptor.contains(MARKUP_INTERFACE) {
            trace!(descriptor, "Collapsed union to markup interface");
            return Ok(TypeExpr::named(MARKUP_INTERFACE));
        }
        // Only the first alternative survives. The remaining ones are dropped.
        let first = alternatives.next().unwrap_or_default();
        debug!(
            owner = ctx.owner,
            field = ctx.field_name,
            descriptor,
            kept = first,
            "Narrowed union to its first alternative"
        );
        descriptor = first;
    }

    if descriptor.contains(LIST_SEPARATOR) {
        if descriptor.contains(INPUT_MEDIA_INTERFACE) {
            trace!(descriptor, "Collapsed alternatives to input media interface");
            return Ok(TypeExpr::named(INPUT_MEDIA_INTERFACE));
        }
        return Err(DocsyncError::UnresolvedUnionType {
            type_name: ctx.owner.to_string(),
            field: ctx.field_name.to_string(),
            descriptor: ctx.raw_type.to_string(),
        });
    }

    let resolved = match descriptor {
        "" => {
            return Err(DocsyncError::EmptyTypeDescriptor {
                type_name: ctx.owner.to_string(),
                field: ctx.field_name.to_string(),
            });
        }
        INTEGER if is_64_bit(ctx) => TypeExpr::Long,
        INTEGER => TypeExpr::Int,
        TRUE => TypeExpr::Boolean,
        FLOAT_NUMBER => TypeExpr::Double,
        other => TypeExpr::named(other),
    };
    Ok(resolved)
}

/// The element descriptor after a leading `Array of`, if there is one.
fn strip_array_prefix(descriptor: &str) -> Option<&str> {
    let rest = descriptor.strip_prefix(ARRAY_PREFIX)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn is_64_bit(ctx: &FieldContext<'_>) -> bool {
    let description = ctx.description.to_lowercase();
    description.contains("64 bit")
        || description.contains("64-bit")
        || ctx.field_name.to_lowercase().ends_with(CHAT_ID_SUFFIX)
}
