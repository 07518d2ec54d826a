//! Struct declaration generation.
//!
//! A struct is rendered as an opening block, one block per field in
//! declaration order, and a closing block.

use crate::context::Context;
use crate::error::CodegenError;
use crate::naming::{field_ident, title_case};
use crate::templates::TemplateKind;
use shapegen_schema::{StructDef, TypeDef};
use std::io::Write;

/// Emits the declaration of a struct and its fields.
///
/// # Errors
/// Returns `CodegenError` if rendering or writing fails.
pub fn emit<W: Write>(
    ctx: &mut Context<'_, W>,
    struct_name: &str,
    def: &StructDef,
) -> Result<(), CodegenError> {
    ctx.render(TemplateKind::Struct, &[("StructName", struct_name)])?;

    for (field_name, field_type) in def.fields.iter() {
        emit_field(ctx, struct_name, field_name, field_type)?;
    }

    ctx.render(TemplateKind::StructEnd, &[("StructName", struct_name)])
}

fn emit_field<W: Write>(
    ctx: &mut Context<'_, W>,
    struct_name: &str,
    field_name: &str,
    field_type: &TypeDef,
) -> Result<(), CodegenError> {
    ctx.register(field_type);

    let type_name = ctx.reference_name(field_type);
    let exported = title_case(field_name);
    let ident = field_ident(field_name);

    ctx.render(
        TemplateKind::Field,
        &[
            ("StructName", struct_name),
            ("FieldType", type_name.as_str()),
            ("ExportedFieldName", exported.as_str()),
            ("FieldName", field_name),
            ("FieldIdent", ident.as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_support::context;
    use pretty_assertions::assert_eq;
    use shapegen_schema::Primitive;

    #[test]
    fn test_emit_point() {
        let point = StructDef::new("Point")
            .field("x", Primitive::Int32)
            .field("y", Primitive::Int32);
        let mut ctx = context();
        emit(&mut ctx, "Point", &point).expect("Failed to emit");

        let output = ctx.written();
        assert_eq!(
            output,
            "/// `Point` record.\n\
             #[derive(Debug, Clone, PartialEq)]\n\
             pub struct Point {\n    \
             /// X (`x`).\n    \
             pub x: prim::Int32,\n    \
             /// Y (`y`).\n    \
             pub y: prim::Int32,\n\
             }\n\n"
        );
        assert_eq!(ctx.pending_len(), 0);
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let user = StructDef::new("User")
            .field("email", Primitive::String)
            .field("age", Primitive::Uint16);
        let mut ctx = context();
        emit(&mut ctx, "User", &user).expect("Failed to emit");

        let output = ctx.written();
        let email = output.find("pub email:").expect("email");
        let age = output.find("pub age:").expect("age");
        assert!(email < age);
    }

    #[test]
    fn test_field_names_are_escaped() {
        let def = StructDef::new("Item")
            .field("type", Primitive::String)
            .field("createdAt", Primitive::Int64);
        let mut ctx = context();
        emit(&mut ctx, "Item", &def).expect("Failed to emit");

        let output = ctx.written();
        assert!(output.contains("/// Type (`type`).\n    pub r#type: prim::String,"));
        assert!(output.contains("/// CreatedAt (`createdAt`).\n    pub created_at: prim::Int64,"));
    }

    #[test]
    fn test_field_types_are_registered() {
        let tags = TypeDef::set(Primitive::String.into());
        let def = StructDef::new("Post")
            .field("tags", tags.clone())
            .field("labels", tags.clone());
        let mut ctx = context();
        emit(&mut ctx, "Post", &def).expect("Failed to emit");

        assert_eq!(ctx.pending_len(), 1);
        assert!(ctx.is_pending(&tags));
        let output = ctx.written();
        assert!(output.contains("pub tags: StringSet,"));
        assert!(output.contains("pub labels: StringSet,"));
    }
}
