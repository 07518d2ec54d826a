//! Schema validation utilities.
//!
//! Decoding guarantees every node has a known shape; validation checks the
//! properties the generated code relies on. Names must be usable as
//! identifiers, and each struct name must denote a single type.

use crate::error::SchemaError;
use crate::ident::{field_ident, is_type_name};
use crate::types::{StructDef, TypeDef};
use std::collections::{HashMap, HashSet};

/// Validates a decoded type definition graph.
///
/// # Arguments
/// * `root` - Root type definition
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the issue.
///
/// # Errors
/// Returns `SchemaError` if a struct name cannot name a type, a field name
/// is empty, two fields map to the same identifier, or two different
/// structs share a name.
pub fn validate_type_def(root: &TypeDef) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    let mut structs: HashMap<&str, &StructDef> = HashMap::new();
    let mut stack = vec![root];

    while let Some(def) = stack.pop() {
        if !seen.insert(def) {
            continue;
        }
        if let TypeDef::Struct(s) = def {
            validate_struct(s)?;
            if let Some(previous) = structs.insert(&s.name, s) {
                if previous != s {
                    return Err(SchemaError::NameCollision {
                        name: s.name.clone(),
                    });
                }
            }
        }
        stack.extend(def.children());
    }

    Ok(())
}

fn validate_struct(def: &StructDef) -> Result<(), SchemaError> {
    if !is_type_name(&def.name) {
        return Err(SchemaError::InvalidName {
            kind: "struct",
            name: def.name.clone(),
        });
    }

    let mut idents: HashMap<String, &str> = HashMap::with_capacity(def.fields.len());
    for name in def.fields.keys() {
        if name.is_empty() {
            return Err(SchemaError::InvalidName {
                kind: "field",
                name: format!("{}.<empty>", def.name),
            });
        }
        if let Some(first) = idents.insert(field_ident(name), name) {
            return Err(SchemaError::DuplicateField {
                struct_name: def.name.clone(),
                first: first.to_string(),
                second: name.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;

    #[test]
    fn test_valid_graph() {
        let point = StructDef::new("Point")
            .field("x", Primitive::Int32)
            .field("y", Primitive::Int32);
        let root = StructDef::new("Shape")
            .field("points", TypeDef::list(point.clone().into()))
            .field("origin", point);

        assert!(validate_type_def(&root.into()).is_ok());
    }

    #[test]
    fn test_invalid_struct_name() {
        let root: TypeDef = StructDef::new("not a name").into();
        let err = validate_type_def(&root).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { kind: "struct", .. }));

        let root: TypeDef = StructDef::new("").into();
        assert!(validate_type_def(&root).is_err());
    }

    #[test]
    fn test_keyword_struct_names() {
        for name in ["Self", "self", "crate", "super", "struct", "type", "_"] {
            let root = TypeDef::list(StructDef::new(name).into());
            let err = validate_type_def(&root).unwrap_err();
            assert!(
                matches!(err, SchemaError::InvalidName { kind: "struct", name: ref n } if n == name),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_struct_named_like_primitive_module() {
        let root: TypeDef = StructDef::new("prim").field("x", Primitive::Int32).into();
        let err = validate_type_def(&root).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { kind: "struct", .. }));
    }

    #[test]
    fn test_empty_field_name() {
        let root: TypeDef = StructDef::new("Bad").field("", Primitive::Bool).into();
        let err = validate_type_def(&root).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidName { kind: "field", .. }));
    }

    #[test]
    fn test_fields_with_same_identifier() {
        let root: TypeDef = StructDef::new("User")
            .field("firstName", Primitive::String)
            .field("first_name", Primitive::String)
            .into();
        let err = validate_type_def(&root).unwrap_err();
        match err {
            SchemaError::DuplicateField {
                struct_name,
                first,
                second,
            } => {
                assert_eq!(struct_name, "User");
                assert_eq!(first, "firstName");
                assert_eq!(second, "first_name");
            }
            other => panic!("unexpected error: {other}"),
        }

        let root: TypeDef = StructDef::new("Row")
            .field("a-b", Primitive::Int32)
            .field("a.b", Primitive::Int32)
            .into();
        assert!(matches!(
            validate_type_def(&root),
            Err(SchemaError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_name_collision() {
        let a = StructDef::new("User").field("email", Primitive::String);
        let b = StructDef::new("User").field("id", Primitive::Uint64);
        let root = TypeDef::map(a.into(), b.into());

        let err = validate_type_def(&root).unwrap_err();
        assert!(matches!(err, SchemaError::NameCollision { ref name } if name == "User"));
    }

    #[test]
    fn test_same_struct_twice_is_not_a_collision() {
        let a = StructDef::new("User").field("email", Primitive::String);
        let root = TypeDef::map(a.clone().into(), TypeDef::set(a.into()));
        assert!(validate_type_def(&root).is_ok());
    }
}
