//! # shapegen Codegen
//!
//! Template-driven code generation from type definition graphs.
//!
//! This crate provides:
//! - Deterministic, shape-derived names for generated types
//! - A work-list walker that emits every reachable type exactly once
//! - One emitter per shape (list, map, set, struct)
//! - Validated, reusable template sets

pub mod context;
pub mod error;
pub mod generator;
pub mod naming;
pub mod shapes;
pub mod templates;

pub use context::{Context, discovery_order};
pub use error::CodegenError;
pub use generator::{Generator, GeneratorBuilder};
pub use templates::{TemplateError, TemplateKind, Templates};

/// Generates code from a JSON schema document with the bundled templates.
///
/// # Arguments
/// * `json` - Schema document describing the root type
/// * `package` - Package name written into the header
///
/// # Returns
/// Generated code as a string.
///
/// # Errors
/// Returns `CodegenError` if decoding, validation, or generation fails.
pub fn generate_from_json(json: &str, package: &str) -> Result<String, CodegenError> {
    Generator::new().generate_json(json, package)
}

/// Generates code from a JSON schema file with the bundled templates.
///
/// # Arguments
/// * `path` - Path to the schema document
/// * `package` - Package name written into the header
///
/// # Returns
/// Generated code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, decoding, or generation fails.
pub fn generate_from_file(path: &std::path::Path, package: &str) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, package)
}
