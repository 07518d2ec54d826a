//! List wrapper generation.

use crate::context::Context;
use crate::error::CodegenError;
use crate::templates::TemplateKind;
use shapegen_schema::TypeDef;
use std::io::Write;

/// Emits the wrapper declaration for a list of `elem`.
///
/// # Errors
/// Returns `CodegenError` if rendering or writing fails.
pub fn emit<W: Write>(
    ctx: &mut Context<'_, W>,
    struct_name: &str,
    elem: &TypeDef,
) -> Result<(), CodegenError> {
    ctx.register(elem);
    let elem_name = ctx.reference_name(elem);

    ctx.render(
        TemplateKind::List,
        &[("StructName", struct_name), ("ElemName", elem_name.as_str())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_support::context;
    use shapegen_schema::{Primitive, StructDef};

    #[test]
    fn test_emit_primitive_list() {
        let mut ctx = context();
        emit(&mut ctx, "Int32List", &Primitive::Int32.into()).expect("Failed to emit");

        assert_eq!(ctx.pending_len(), 0);
        let output = ctx.written();
        assert!(output.contains("pub struct Int32List(pub Vec<prim::Int32>);"));
        assert!(output.contains("pub fn push(&mut self, elem: prim::Int32)"));
    }

    #[test]
    fn test_emit_registers_element() {
        let point: TypeDef = StructDef::new("Point").field("x", Primitive::Int32).into();
        let mut ctx = context();
        emit(&mut ctx, "PointList", &point).expect("Failed to emit");

        assert!(ctx.is_pending(&point));
        let output = ctx.written();
        assert!(output.contains("pub struct PointList(pub Vec<Point>);"));
    }
}
