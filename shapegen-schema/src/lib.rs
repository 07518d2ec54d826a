//! # shapegen Schema
//!
//! Value model and type definitions for schema-driven code generation.
//!
//! This crate provides:
//! - Immutable, structurally compared schema values
//! - Typed definitions for lists, maps, sets, structs and primitives
//! - Decoding of schema values and JSON documents into definitions
//! - Schema validation

pub mod error;
pub mod ident;
pub mod parser;
pub mod types;
pub mod validation;
pub mod value;

pub use error::{ParseError, SchemaError};
pub use ident::{field_ident, is_identifier, is_type_name};
pub use parser::{parse_file, parse_json, parse_type_def};
pub use types::{Fields, Primitive, StructDef, TypeDef};
pub use validation::validate_type_def;
pub use value::{OrderedMap, Value, ValueMap};
