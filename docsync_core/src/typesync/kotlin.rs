//! Kotlin model generation.
//!
//! The generated file is a flat list of blocks separated by two blank lines:
//! the file header, one declaration per extracted type in document order, one
//! `enum class` per static enum definition, then one empty `interface` per
//! interface that no extracted type declares.

use crate::classify::ClassifiedModel;
use crate::tables::EnumDefinition;
use crate::types::{DeclarationKind, ResolvedField, ResolvedType, TypeExpr};
use crate::typesync::config::OutputConfig;
use crate::typesync::doc_comment::format_doc_comment;

/// Separator between top-level blocks.
const BLOCK_SEPARATOR: &str = "\n\n\n";

/// Indentation of declaration members.
const MEMBER_INDENT: usize = 4;

/// Main entry point for generating the Kotlin model file.
pub fn generate_kotlin_model_string(
    model: &ClassifiedModel,
    enums: &[EnumDefinition],
    config: &OutputConfig,
) -> String {
    tracing::info!(
        type_count = model.types.len(),
        enum_count = enums.len(),
        stub_count = model.stubs.len(),
        "Generating Kotlin model"
    );

    let mut blocks = Vec::with_capacity(1 + model.types.len() + enums.len() + model.stubs.len());
    blocks.push(generate_header(&config.package));
    blocks.extend(
        model
            .types
            .iter()
            .map(|declaration| generate_declaration(declaration, config.max_width)),
    );
    blocks.extend(enums.iter().map(generate_enum));
    blocks.extend(
        model
            .stubs
            .iter()
            .map(|stub| generate_declaration(stub, config.max_width)),
    );

    let mut output = blocks.join(BLOCK_SEPARATOR);
    output.push('\n');

    tracing::info!(output_length = output.len(), "Kotlin model generation complete");
    output
}

fn generate_header(package: &str) -> String {
    format!(
        "@file:Suppress(\"unused\")\n\npackage {package}\n\nimport com.fasterxml.jackson.annotation.JsonValue"
    )
}

/// Renders one declaration with its documentation, fields and supertype.
fn generate_declaration(declaration: &ResolvedType, max_width: usize) -> String {
    let mut output = format_doc_comment(&declaration.documentation, 0, max_width);

    let keyword = match declaration.kind {
        DeclarationKind::Interface => "interface",
        DeclarationKind::Record => "data class",
        DeclarationKind::Marker => "class",
    };
    output.push_str(&format!("{} {}", keyword, declaration.name));

    if !declaration.fields.is_empty() {
        output.push('(');
        for (idx, field) in declaration.fields.iter().enumerate() {
            if idx > 0 {
                output.push(',');
            }
            output.push_str("\n\n");
            output.push_str(&generate_field(field, max_width));
        }
        output.push_str("\n)");
    }

    if let Some(supertype) = &declaration.supertype {
        output.push_str(&format!(" : {}", supertype));
    }

    output
}

fn generate_field(field: &ResolvedField, max_width: usize) -> String {
    let mut output = format_doc_comment(&[&field.description], MEMBER_INDENT, max_width);
    output.push_str(&format!(
        "{}val {}: {}",
        " ".repeat(MEMBER_INDENT),
        field.name,
        type_expr_to_kotlin(&field.field_type)
    ));
    if field.optional {
        output.push_str("? = null");
    }
    output
}

fn generate_enum(definition: &EnumDefinition) -> String {
    let pad = " ".repeat(MEMBER_INDENT);
    let constants: Vec<String> = definition
        .constants
        .iter()
        .map(|(name, wire_value)| format!("{pad}{name}(\"{wire_value}\")"))
        .collect();

    let mut output = format!("enum class {}(@JsonValue val jsonName: String) {{\n", definition.name);
    output.push_str(&constants.join(",\n"));
    output.push_str(";\n\n");
    output.push_str(&format!("{pad}override fun toString() = jsonName\n}}"));
    output
}

/// Convert a TypeExpr to its Kotlin type representation.
pub fn type_expr_to_kotlin(type_expr: &TypeExpr) -> String {
    match type_expr {
        TypeExpr::Int => "Int".to_string(),
        TypeExpr::Long => "Long".to_string(),
        TypeExpr::Boolean => "Boolean".to_string(),
        TypeExpr::Double => "Double".to_string(),
        TypeExpr::List(inner) => format!("List<{}>", type_expr_to_kotlin(inner)),
        TypeExpr::Named(name) => name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ENUMS;
    use pretty_assertions::assert_eq;

    fn field(name: &str, field_type: TypeExpr, description: &str, optional: bool) -> ResolvedField {
        ResolvedField {
            name: name.to_string(),
            field_type,
            description: description.to_string(),
            optional,
        }
    }

    fn declaration(name: &str, kind: DeclarationKind, fields: Vec<ResolvedField>) -> ResolvedType {
        ResolvedType {
            name: name.to_string(),
            documentation: Vec::new(),
            fields,
            kind,
            supertype: None,
        }
    }

    #[test]
    fn test_type_expr_to_kotlin() {
        assert_eq!(type_expr_to_kotlin(&TypeExpr::Int), "Int");
        assert_eq!(type_expr_to_kotlin(&TypeExpr::Long), "Long");
        assert_eq!(type_expr_to_kotlin(&TypeExpr::Boolean), "Boolean");
        assert_eq!(type_expr_to_kotlin(&TypeExpr::Double), "Double");
        assert_eq!(
            type_expr_to_kotlin(&TypeExpr::list(TypeExpr::list(TypeExpr::named("PhotoSize")))),
            "List<List<PhotoSize>>"
        );
    }

    #[test]
    fn test_data_class_with_optional_field() {
        let mut user = declaration(
            "User",
            DeclarationKind::Record,
            vec![
                field("id", TypeExpr::Long, "Unique identifier for this user or bot.", false),
                field("lastName", TypeExpr::named("String"), "User's or bot's last name", true),
            ],
        );
        user.documentation = vec!["This object represents a Telegram user or bot.".to_string()];

        insta::assert_snapshot!(generate_declaration(&user, 116), @r###"
        /**
         * This object represents a Telegram user or bot.
         */
        data class User(

            /**
             * Unique identifier for this user or bot.
             */
            val id: Long,

            /**
             * User's or bot's last name
             */
            val lastName: String? = null
        )
        "###);
    }

    #[test]
    fn test_marker_and_interface_headers() {
        let marker = declaration("CallbackGame", DeclarationKind::Marker, Vec::new());
        assert_eq!(generate_declaration(&marker, 116), "class CallbackGame");

        let stub = ResolvedType::interface_stub("InputMedia");
        assert_eq!(generate_declaration(&stub, 116), "interface InputMedia");
    }

    #[test]
    fn test_supertype_follows_field_list() {
        let mut force_reply = declaration(
            "ForceReply",
            DeclarationKind::Record,
            vec![field("forceReply", TypeExpr::Boolean, "", false)],
        );
        force_reply.supertype = Some("Markup".to_string());

        assert_eq!(
            generate_declaration(&force_reply, 116),
            "data class ForceReply(\n\n    val forceReply: Boolean\n) : Markup"
        );

        let mut marker = declaration("InputMediaSticker", DeclarationKind::Marker, Vec::new());
        marker.supertype = Some("InputMedia".to_string());
        assert_eq!(generate_declaration(&marker, 116), "class InputMediaSticker : InputMedia");
    }

    #[test]
    fn test_field_comment_wraps_within_indented_budget() {
        let poll = declaration(
            "Poll",
            DeclarationKind::Record,
            vec![field("question", TypeExpr::named("String"), "Poll question text", false)],
        );

        assert_eq!(
            generate_declaration(&poll, 20),
            "data class Poll(\n\n    /**\n     * Poll question\n     * text\n     */\n    val question: String\n)"
        );
    }

    #[test]
    fn test_enum_declaration() {
        let parse_mode = ENUMS.iter().find(|e| e.name == "ParseMode").unwrap();

        insta::assert_snapshot!(generate_enum(parse_mode), @r###"
        enum class ParseMode(@JsonValue val jsonName: String) {
            MARKDOWN_V2("MarkdownV2"),
            MARKDOWN("Markdown"),
            HTML("HTML");

            override fun toString() = jsonName
        }
        "###);
    }

    #[test]
    fn test_block_order_and_trailing_newline() {
        let model = ClassifiedModel {
            types: vec![declaration("CallbackGame", DeclarationKind::Marker, Vec::new())],
            stubs: vec![ResolvedType::interface_stub("Markup")],
        };
        let enums = [EnumDefinition {
            name: "Color",
            constants: &[("RED", "red")],
        }];
        let config = OutputConfig {
            package: "com.example.api".to_string(),
            ..OutputConfig::default()
        };

        let output = generate_kotlin_model_string(&model, &enums, &config);

        assert_eq!(
            output,
            "@file:Suppress(\"unused\")\n\npackage com.example.api\n\nimport com.fasterxml.jackson.annotation.JsonValue\n\n\nclass CallbackGame\n\n\nenum class Color(@JsonValue val jsonName: String) {\n    RED(\"red\");\n\n    override fun toString() = jsonName\n}\n\n\ninterface Markup\n"
        );
        assert!(!output.ends_with("\n\n"));
    }
}
