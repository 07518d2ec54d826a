//! Map wrapper generation.

use crate::context::Context;
use crate::error::CodegenError;
use crate::templates::TemplateKind;
use shapegen_schema::TypeDef;
use std::io::Write;

/// Emits the wrapper declaration for a map from `key` to `value`.
///
/// # Errors
/// Returns `CodegenError` if rendering or writing fails.
pub fn emit<W: Write>(
    ctx: &mut Context<'_, W>,
    struct_name: &str,
    key: &TypeDef,
    value: &TypeDef,
) -> Result<(), CodegenError> {
    ctx.register(key);
    ctx.register(value);
    let key_name = ctx.reference_name(key);
    let value_name = ctx.reference_name(value);

    ctx.render(
        TemplateKind::Map,
        &[
            ("StructName", struct_name),
            ("KeyName", key_name.as_str()),
            ("ValueName", value_name.as_str()),
        ],
    )
}
