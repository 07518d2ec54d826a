//! Canonical names for generated types.
//!
//! Names are derived from the shape of a definition alone, so the same
//! shape always gets the same name and references to it can be written
//! before (or after) its declaration is emitted.

use shapegen_schema::TypeDef;

pub use shapegen_schema::ident::{field_ident, to_snake_case};

/// Default module prefix for references to primitive types.
pub const DEFAULT_PRIMITIVE_PREFIX: &str = "prim::";

/// Returns the generated type name for a definition.
///
/// - primitives use their capitalized name (`int32` → `Int32`)
/// - lists append `List` to the element name
/// - maps concatenate key and value names and append `Map`
/// - sets append `Set` to the element name
/// - structs use their declared name verbatim
#[must_use]
pub fn struct_name(def: &TypeDef) -> String {
    match def {
        TypeDef::Primitive(p) => p.canonical_name().to_string(),
        TypeDef::List(elem) => format!("{}List", struct_name(elem)),
        TypeDef::Map { key, value } => {
            format!("{}{}Map", struct_name(key), struct_name(value))
        }
        TypeDef::Set(elem) => format!("{}Set", struct_name(elem)),
        TypeDef::Struct(s) => s.name.clone(),
    }
}

/// Returns the name used to reference a definition from generated code.
///
/// Primitives live in a separate module and carry `prefix`; generated types
/// are referenced by their bare name.
#[must_use]
pub fn reference_name(def: &TypeDef, prefix: &str) -> String {
    let name = struct_name(def);
    if def.is_primitive() {
        format!("{prefix}{name}")
    } else {
        name
    }
}

/// Upper-cases the first character of a field name.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
