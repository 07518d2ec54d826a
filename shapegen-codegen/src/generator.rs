//! Main code generator.

use crate::context::Context;
use crate::error::CodegenError;
use crate::naming::DEFAULT_PRIMITIVE_PREFIX;
use crate::templates::Templates;
use shapegen_schema::{TypeDef, validate_type_def};
use std::io::Write;

/// Builder for configuring a [`Generator`].
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    templates: Option<Templates>,
    primitive_prefix: String,
    validate: bool,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: None,
            primitive_prefix: DEFAULT_PRIMITIVE_PREFIX.to_string(),
            validate: true,
        }
    }

    /// Sets the templates to render with. Defaults to [`Templates::builtin`].
    #[must_use]
    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Sets the prefix of references to primitive types.
    ///
    /// Must match the module the header template declares primitives in.
    #[must_use]
    pub fn primitive_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.primitive_prefix = prefix.into();
        self
    }

    /// Enables or disables schema validation before generation.
    #[must_use]
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Builds the generator.
    #[must_use]
    pub fn build(self) -> Generator {
        Generator {
            templates: self.templates.unwrap_or_default(),
            primitive_prefix: self.primitive_prefix,
            validate: self.validate,
        }
    }
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Code generator for type definition graphs.
///
/// A generator holds only immutable configuration; every call runs on a
/// fresh [`Context`].
#[derive(Debug, Clone)]
pub struct Generator {
    templates: Templates,
    primitive_prefix: String,
    validate: bool,
}

impl Generator {
    /// Creates a generator with the bundled templates.
    #[must_use]
    pub fn new() -> Self {
        GeneratorBuilder::new().build()
    }

    /// Returns a builder for a custom generator.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the templates in use.
    #[must_use]
    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Generates code for `root` and every type it references.
    ///
    /// # Errors
    /// Returns `CodegenError` if validation or rendering fails.
    pub fn generate(&self, root: &TypeDef, package: &str) -> Result<String, CodegenError> {
        let bytes = self.write_to(root, package, Vec::new())?;
        String::from_utf8(bytes).map_err(|e| CodegenError::generation(e.to_string()))
    }

    /// Generates code for `root` into `out`, returning the writer.
    ///
    /// Output already written when an error occurs is left in place.
    ///
    /// # Errors
    /// Returns `CodegenError` if validation, rendering, or writing fails.
    pub fn write_to<W: Write>(
        &self,
        root: &TypeDef,
        package: &str,
        out: W,
    ) -> Result<W, CodegenError> {
        if self.validate {
            validate_type_def(root)?;
        }
        Context::new(&self.templates, &self.primitive_prefix, out).run(root, package)
    }

    /// Decodes a JSON schema document and generates code for it.
    ///
    /// # Errors
    /// Returns `CodegenError` if decoding, validation, or rendering fails.
    pub fn generate_json(&self, json: &str, package: &str) -> Result<String, CodegenError> {
        let root = shapegen_schema::parse_json(json)?;
        self.generate(&root, package)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
