//! Set wrapper generation.

use crate::context::Context;
use crate::error::CodegenError;
use crate::templates::TemplateKind;
use shapegen_schema::TypeDef;
use std::io::Write;

/// Emits the wrapper declaration for a set of `elem`.
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
        TemplateKind::Set,
        &[("StructName", struct_name), ("ElemName", elem_name.as_str())],
    )
}
