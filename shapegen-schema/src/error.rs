//! Error types for schema decoding and validation.

use thiserror::Error;

/// Error type for decoding type definitions.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON value kind with no counterpart in the value model.
    #[error("unsupported JSON {kind} at '{path}' (only strings and objects are allowed)")]
    UnsupportedJson {
        /// JSON kind (number, array, ...).
        kind: &'static str,
        /// Path of the offending node.
        path: String,
    },

    /// Primitive type name outside the known set.
    #[error("unknown primitive type '{name}' at '{path}'")]
    UnknownPrimitive {
        /// Primitive name.
        name: String,
        /// Path of the offending node.
        path: String,
    },

    /// Unrecognized `$type` discriminator.
    #[error("unexpected type definition '{discriminator}' at '{path}'")]
    UnknownShape {
        /// Discriminator value.
        discriminator: String,
        /// Path of the offending node.
        path: String,
    },

    /// Required key missing from a definition.
    #[error("missing required field '{field}' at '{path}'")]
    MissingField {
        /// Field name.
        field: String,
        /// Path of the offending node.
        path: String,
    },

    /// A text value was required but a map was found.
    #[error("expected text for '{field}' at '{path}'")]
    ExpectedText {
        /// Field name.
        field: String,
        /// Path of the offending node.
        path: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Struct or field name that cannot name a generated declaration.
    #[error("invalid {kind} name '{name}'")]
    InvalidName {
        /// Kind of name (struct, field).
        kind: &'static str,
        /// The offending name.
        name: String,
    },

    /// Two different types resolve to the same generated name.
    #[error("name collision: '{name}' is declared by more than one type")]
    NameCollision {
        /// Colliding name.
        name: String,
    },

    /// Two fields of one struct map to the same generated identifier.
    #[error("fields '{first}' and '{second}' of {struct_name} map to the same identifier")]
    DuplicateField {
        /// Struct declaring both fields.
        struct_name: String,
        /// Field declared first.
        first: String,
        /// Field declared second.
        second: String,
    },
}

impl ParseError {
    /// Creates a missing field error.
    pub fn missing(field: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
            path: path.into(),
        }
    }

    /// Creates an expected text error.
    pub fn expected_text(field: impl Into<String>, path: impl Into<String>) -> Self {
        Self::ExpectedText {
            field: field.into(),
            path: path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::missing("elem", "root");
        assert_eq!(err.to_string(), "missing required field 'elem' at 'root'");

        let err = ParseError::UnknownShape {
            discriminator: "TupleDef".to_string(),
            path: "root.pos".to_string(),
        };
        assert!(err.to_string().contains("TupleDef"));
    }

    #[test]
    fn test_schema_error_from_parse() {
        let err: SchemaError = ParseError::expected_text("$name", "root").into();
        assert!(matches!(err, SchemaError::Parse(_)));
        assert!(err.to_string().starts_with("parse error"));
    }

    #[test]
    fn test_duplicate_field_display() {
        let err = SchemaError::DuplicateField {
            struct_name: "User".to_string(),
            first: "firstName".to_string(),
            second: "first_name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fields 'firstName' and 'first_name' of User map to the same identifier"
        );
    }
}
