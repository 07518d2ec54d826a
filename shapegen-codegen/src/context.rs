//! Type graph walker.
//!
//! A [`Context`] drives one generation run. Every non-primitive definition
//! reachable from the root is registered at most once; registered
//! definitions wait in a FIFO queue until they are emitted. Because each
//! emitted block only needs the *names* of the types it references, no
//! topological ordering is needed and shared or repeated subtypes are
//! emitted exactly once.

use crate::error::CodegenError;
use crate::naming;
use crate::shapes;
use crate::templates::{TemplateKind, Templates};
use shapegen_schema::{Primitive, SchemaError, TypeDef};
use std::collections::{HashSet, VecDeque};
use std::io::Write;
use tracing::{debug, info, trace};

/// State of a single generation run.
///
/// Created per run and consumed by [`Context::run`]; never reused.
pub struct Context<'a, W: Write> {
    templates: &'a Templates,
    primitive_prefix: &'a str,
    out: W,
    /// Every definition ever registered: pending ∪ emitted.
    discovered: HashSet<TypeDef>,
    pending: VecDeque<TypeDef>,
    emitted_names: HashSet<String>,
    scratch: String,
}

impl<'a, W: Write> Context<'a, W> {
    /// Creates a new context writing to `out`.
    #[must_use]
    pub fn new(templates: &'a Templates, primitive_prefix: &'a str, out: W) -> Self {
        Self {
            templates,
            primitive_prefix,
            out,
            discovered: HashSet::new(),
            pending: VecDeque::new(),
            emitted_names: HashSet::new(),
            scratch: String::new(),
        }
    }

    /// Registers a definition for emission.
    ///
    /// Primitives and definitions already pending or emitted are ignored.
    /// Returns true if the definition was newly queued.
    pub fn register(&mut self, def: &TypeDef) -> bool {
        if def.is_primitive() || self.discovered.contains(def) {
            return false;
        }
        trace!("registered {}", naming::struct_name(def));
        self.discovered.insert(def.clone());
        self.pending.push_back(def.clone());
        true
    }

    /// Writes the header, then every type reachable from `root`.
    ///
    /// Returns the writer once the queue is drained. On error, whatever was
    /// already written stays written.
    ///
    /// # Errors
    /// Returns `CodegenError` if rendering or writing fails, or if two
    /// different types resolve to the same name.
    pub fn run(mut self, root: &TypeDef, package: &str) -> Result<W, CodegenError> {
        let aliases = primitive_aliases();
        self.render(
            TemplateKind::Header,
            &[("PackageName", package), ("PrimitiveAliases", aliases.as_str())],
        )?;

        self.register(root);

        while let Some(def) = self.pending.pop_front() {
            self.emit(&def)?;
        }

        info!(
            "generated {} types for package {}",
            self.discovered.len(),
            package
        );
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, def: &TypeDef) -> Result<(), CodegenError> {
        let name = naming::struct_name(def);
        if !self.emitted_names.insert(name.clone()) {
            return Err(SchemaError::NameCollision { name }.into());
        }
        debug!("emitting {} ({})", name, def.shape_name());

        match def {
            TypeDef::List(elem) => shapes::list::emit(self, &name, elem),
            TypeDef::Set(elem) => shapes::set::emit(self, &name, elem),
            TypeDef::Map { key, value } => shapes::map::emit(self, &name, key, value),
            TypeDef::Struct(s) => shapes::structs::emit(self, &name, s),
            TypeDef::Primitive(p) => Err(CodegenError::generation(format!(
                "primitive '{}' cannot be emitted as a declaration",
                p.name()
            ))),
        }
    }

    /// Returns the name used to reference `def` from generated code.
    pub(crate) fn reference_name(&self, def: &TypeDef) -> String {
        naming::reference_name(def, self.primitive_prefix)
    }

    /// Renders a template and writes it out.
    pub(crate) fn render(
        &mut self,
        kind: TemplateKind,
        data: &[(&str, &str)],
    ) -> Result<(), CodegenError> {
        self.scratch.clear();
        self.templates.render(kind, data, &mut self.scratch)?;
        self.out.write_all(self.scratch.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
impl<W: Write> Context<'_, W> {
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if the definition is waiting to be emitted.
    pub(crate) fn is_pending(&self, def: &TypeDef) -> bool {
        self.pending.contains(def)
    }
}

#[cfg(test)]
impl Context<'_, Vec<u8>> {
    /// Output written so far.
    pub(crate) fn written(&self) -> String {
        String::from_utf8(self.out.clone()).expect("utf8")
    }
}

/// Returns every non-primitive definition reachable from `root`, in the
/// order a generation run emits them.
#[must_use]
pub fn discovery_order(root: &TypeDef) -> Vec<TypeDef> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([root]);
    let mut order = Vec::new();

    while let Some(def) = queue.pop_front() {
        if def.is_primitive() || !seen.insert(def) {
            continue;
        }
        order.push(def.clone());
        queue.extend(def.children());
    }

    order
}

fn primitive_aliases() -> String {
    Primitive::ALL
        .iter()
        .filter(|p| **p != Primitive::Value)
        .map(|p| format!("    pub type {} = {};\n", p.canonical_name(), p.rust_type()))
        .collect()
}
