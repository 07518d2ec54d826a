//! Type definition decoder.
//!
//! This module turns schema values into typed [`TypeDef`]s. The whole tree
//! is decoded up front, so a malformed definition anywhere in the graph is
//! reported before any code is generated.

use crate::error::ParseError;
use crate::types::{
    METADATA_SIGIL, NAME_KEY, Primitive, SHAPE_NAMESPACE, StructDef, TYPE_KEY, TypeDef,
};
use crate::value::{Value, ValueMap};

/// Decodes a schema value into a type definition.
///
/// # Arguments
/// * `value` - Text naming a primitive, or a map carrying a `$type` discriminator
///
/// # Returns
/// Decoded type definition or parse error.
///
/// # Errors
/// Returns `ParseError` if the value names an unknown primitive or shape, or
/// lacks a required key.
pub fn parse_type_def(value: &Value) -> Result<TypeDef, ParseError> {
    parse_at(value, "root")
}

/// Parses a JSON schema document into a type definition.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or does not describe a
/// valid type definition.
pub fn parse_json(json: &str) -> Result<TypeDef, ParseError> {
    let value = crate::value::parse_json(json)?;
    parse_type_def(&value)
}

/// Reads and parses a JSON schema file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_file(path: &std::path::Path) -> Result<TypeDef, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_json(&json)
}

fn parse_at(value: &Value, path: &str) -> Result<TypeDef, ParseError> {
    match value {
        Value::Text(name) => Primitive::from_name(name)
            .map(TypeDef::Primitive)
            .ok_or_else(|| ParseError::UnknownPrimitive {
                name: name.clone(),
                path: path.to_string(),
            }),
        Value::Map(map) => parse_def(map, path),
    }
}

fn parse_def(map: &ValueMap, path: &str) -> Result<TypeDef, ParseError> {
    let discriminator = required_text(map, TYPE_KEY, path)?;
    let shape = discriminator
        .strip_prefix(SHAPE_NAMESPACE)
        .unwrap_or(discriminator);

    match shape {
        "ListDef" => Ok(TypeDef::list(child(map, "elem", path)?)),
        "SetDef" => Ok(TypeDef::set(child(map, "elem", path)?)),
        "MapDef" => Ok(TypeDef::map(
            child(map, "key", path)?,
            child(map, "value", path)?,
        )),
        "StructDef" => parse_struct(map, path).map(TypeDef::Struct),
        _ => Err(ParseError::UnknownShape {
            discriminator: discriminator.to_string(),
            path: path.to_string(),
        }),
    }
}

fn parse_struct(map: &ValueMap, path: &str) -> Result<StructDef, ParseError> {
    let name = required_text(map, NAME_KEY, path)?;
    let mut def = StructDef::new(name);

    for (field_name, field_value) in map.iter() {
        if is_metadata(field_name) {
            continue;
        }
        let field_path = format!("{path}.{field_name}");
        def.add_field(field_name, parse_at(field_value, &field_path)?);
    }

    Ok(def)
}

/// Returns true if a struct key carries metadata instead of a field.
#[must_use]
pub fn is_metadata(key: &str) -> bool {
    key.starts_with(METADATA_SIGIL)
}

fn child(map: &ValueMap, key: &str, path: &str) -> Result<TypeDef, ParseError> {
    let value = map.get(key).ok_or_else(|| ParseError::missing(key, path))?;
    parse_at(value, &format!("{path}.{key}"))
}

fn required_text<'a>(map: &'a ValueMap, key: &str, path: &str) -> Result<&'a str, ParseError> {
    match map.get(key) {
        Some(Value::Text(s)) => Ok(s),
        Some(Value::Map(_)) => Err(ParseError::expected_text(key, path)),
        None => Err(ParseError::missing(key, path)),
    }
}
