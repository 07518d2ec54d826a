//! Type definitions.
//!
//! A type definition describes the shape of one generated type: a
//! primitive scalar, a list, a map, a set, or a named struct. Definitions
//! are plain values, so two independently built definitions of the same
//! shape compare equal and hash the same.

use crate::value::OrderedMap;

/// Prefix marking struct keys that carry metadata rather than fields.
pub const METADATA_SIGIL: char = '$';

/// Discriminator key of a definition map.
pub const TYPE_KEY: &str = "$type";

/// Declared struct name key.
pub const NAME_KEY: &str = "$name";

/// Optional namespace qualifier on `$type` discriminators (`noms.ListDef`).
pub const SHAPE_NAMESPACE: &str = "noms.";

/// Struct fields keyed by field name, in declaration order.
pub type Fields = OrderedMap<TypeDef>;

/// Type definition variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDef {
    /// Primitive scalar, never emitted on its own.
    Primitive(Primitive),
    /// Ordered sequence of elements.
    List(Box<TypeDef>),
    /// Keyed mapping.
    Map {
        /// Key type.
        key: Box<TypeDef>,
        /// Value type.
        value: Box<TypeDef>,
    },
    /// Unordered collection of elements.
    Set(Box<TypeDef>),
    /// Named record.
    Struct(StructDef),
}

impl TypeDef {
    /// Creates a list definition.
    #[must_use]
    pub fn list(elem: TypeDef) -> Self {
        Self::List(Box::new(elem))
    }

    /// Creates a map definition.
    #[must_use]
    pub fn map(key: TypeDef, value: TypeDef) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Creates a set definition.
    #[must_use]
    pub fn set(elem: TypeDef) -> Self {
        Self::Set(Box::new(elem))
    }

    /// Returns true if this is a primitive type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns the shape discriminator used in schema documents.
    #[must_use]
    pub const fn shape_name(&self) -> &'static str {
        match self {
            Self::Primitive(_) => "Primitive",
            Self::List(_) => "ListDef",
            Self::Map { .. } => "MapDef",
            Self::Set(_) => "SetDef",
            Self::Struct(_) => "StructDef",
        }
    }

    /// Returns the directly referenced type definitions, in declaration order.
    #[must_use]
    pub fn children(&self) -> Vec<&TypeDef> {
        match self {
            Self::Primitive(_) => Vec::new(),
            Self::List(elem) | Self::Set(elem) => vec![elem.as_ref()],
            Self::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            Self::Struct(s) => s.fields.iter().map(|(_, ty)| ty).collect(),
        }
    }
}

impl From<Primitive> for TypeDef {
    fn from(p: Primitive) -> Self {
        Self::Primitive(p)
    }
}

impl From<StructDef> for TypeDef {
    fn from(s: StructDef) -> Self {
        Self::Struct(s)
    }
}

/// Named record definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructDef {
    /// Declared name, used verbatim as the generated type name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Fields,
}

impl StructDef {
    /// Creates a struct definition with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Fields::new(),
        }
    }

    /// Adds a field, builder style.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<TypeDef>) -> Self {
        self.add_field(name, ty);
        self
    }

    /// Adds a field.
    pub fn add_field(&mut self, name: impl Into<String>, ty: impl Into<TypeDef>) {
        self.fields.insert(name, ty.into());
    }

    /// Looks up a field type by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&TypeDef> {
        self.fields.get(name)
    }
}

/// Primitive scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Boolean.
    Bool,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Opaque byte blob.
    Blob,
    /// UTF-8 text.
    String,
    /// Untyped set.
    Set,
    /// Untyped map.
    Map,
    /// Any value.
    Value,
}

impl Primitive {
    /// All primitives, in declaration order.
    pub const ALL: [Primitive; 14] = [
        Self::Bool,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Float32,
        Self::Float64,
        Self::Blob,
        Self::String,
        Self::Set,
        Self::Map,
        Self::Value,
    ];

    /// Returns the schema name of the primitive.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Blob => "blob",
            Self::String => "string",
            Self::Set => "set",
            Self::Map => "map",
            Self::Value => "value",
        }
    }

    /// Returns the capitalized name used in generated code.
    #[must_use]
    pub const fn canonical_name(&self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Uint16 => "Uint16",
            Self::Uint32 => "Uint32",
            Self::Uint64 => "Uint64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::Blob => "Blob",
            Self::String => "String",
            Self::Set => "Set",
            Self::Map => "Map",
            Self::Value => "Value",
        }
    }

    /// Returns the Rust type the primitive is represented by.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int16 => "i16",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Uint16 => "u16",
            Self::Uint32 => "u32",
            Self::Uint64 => "u64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Blob => "Vec<u8>",
            Self::String => "std::string::String",
            Self::Set => "Vec<Value>",
            Self::Map => "Vec<(Value, Value)>",
            Self::Value => "Value",
        }
    }

    /// Parses a primitive from its schema name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}
