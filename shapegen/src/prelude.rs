//! Prelude module for convenient imports.
//!
//! ```
//! use shapegen::prelude::*;
//! ```

// Schema types
pub use shapegen_schema::{
    ParseError, Primitive, SchemaError, StructDef, TypeDef, Value, ValueMap, parse_json,
    parse_type_def, validate_type_def,
};

// Codegen types
pub use shapegen_codegen::naming::{reference_name, struct_name};
pub use shapegen_codegen::{
    CodegenError, Generator, GeneratorBuilder, TemplateError, TemplateKind, Templates,
};
