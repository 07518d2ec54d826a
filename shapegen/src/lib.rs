//! # shapegen
//!
//! Schema-driven generator of type declarations.
//!
//! A schema describes a root type as a tree of lists, maps, sets and named
//! structs over primitive scalars. The generator walks that tree and emits
//! one declaration per distinct type, named after its shape
//! (`Int32List`, `StringBoolMap`, ...), using a configurable set of
//! templates.
//!
//! ## Quick Start
//!
//! ```
//! use shapegen::prelude::*;
//!
//! let point = StructDef::new("Point")
//!     .field("x", Primitive::Int32)
//!     .field("y", Primitive::Int32);
//! let root = TypeDef::list(point.into());
//!
//! let code = Generator::new().generate(&root, "geo").unwrap();
//! assert!(code.contains("pub struct PointList("));
//! assert!(code.contains("pub struct Point {"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Value model, type definitions, decoding and validation
//! - [`codegen`] - Naming, templates, and the generation walker

pub mod prelude;

/// Value model, type definitions, decoding and validation.
pub mod schema {
    pub use shapegen_schema::*;
}

/// Naming, templates, and the generation walker.
pub mod codegen {
    pub use shapegen_codegen::*;
}
