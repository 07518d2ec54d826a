//! Template configuration and rendering.
//!
//! A [`Templates`] value holds one parsed template per [`TemplateKind`]. It is
//! built once, validated eagerly (every placeholder must be one the kind
//! provides), and then shared by reference with every generation run.
//!
//! Template syntax is literal text with `{{Name}}` placeholders.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for template loading and rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// `{{` without a matching `}}`.
    #[error("unterminated placeholder in {template} at byte {offset}")]
    Unterminated {
        /// Template file name.
        template: &'static str,
        /// Byte offset of the opening braces.
        offset: usize,
    },

    /// `{{}}` with no name.
    #[error("empty placeholder in {template} at byte {offset}")]
    EmptyPlaceholder {
        /// Template file name.
        template: &'static str,
        /// Byte offset of the opening braces.
        offset: usize,
    },

    /// Placeholder the template kind does not provide.
    #[error("unknown placeholder '{name}' in {template} (expected one of: {expected})")]
    UnknownPlaceholder {
        /// Template file name.
        template: &'static str,
        /// Placeholder name.
        name: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },

    /// Template kind absent from a source set or template directory.
    #[error("missing template {template}")]
    MissingTemplate {
        /// Template file name.
        template: &'static str,
    },

    /// Render data lacks a value for a placeholder.
    #[error("no value bound for '{name}' while rendering {template}")]
    MissingBinding {
        /// Template file name.
        template: &'static str,
        /// Placeholder name.
        name: String,
    },

    /// IO error while reading a template file.
    #[error("failed to read template {}: {source}", path.display())]
    Io {
        /// Template path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
}

/// Kinds of template used by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    /// File header, rendered once.
    Header,
    /// One struct field.
    Field,
    /// List wrapper.
    List,
    /// Map wrapper.
    Map,
    /// Set wrapper.
    Set,
    /// Opening of a struct declaration.
    Struct,
    /// Closing of a struct declaration.
    StructEnd,
}

impl TemplateKind {
    /// All template kinds.
    pub const ALL: [TemplateKind; 7] = [
        Self::Header,
        Self::Field,
        Self::List,
        Self::Map,
        Self::Set,
        Self::Struct,
        Self::StructEnd,
    ];

    /// Returns the file name the template is loaded from.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Header => "header.tmpl",
            Self::Field => "field.tmpl",
            Self::List => "list.tmpl",
            Self::Map => "map.tmpl",
            Self::Set => "set.tmpl",
            Self::Struct => "struct.tmpl",
            Self::StructEnd => "struct_end.tmpl",
        }
    }

    /// Returns the placeholder names this kind of template may use.
    #[must_use]
    pub const fn placeholders(&self) -> &'static [&'static str] {
        match self {
            Self::Header => &["PackageName", "PrimitiveAliases"],
            Self::Field => &[
                "StructName",
                "FieldType",
                "ExportedFieldName",
                "FieldName",
                "FieldIdent",
            ],
            Self::List | Self::Set => &["StructName", "ElemName"],
            Self::Map => &["StructName", "KeyName", "ValueName"],
            Self::Struct | Self::StructEnd => &["StructName"],
        }
    }

    /// Returns the bundled default source.
    #[must_use]
    pub const fn builtin_source(&self) -> &'static str {
        match self {
            Self::Header => include_str!("../templates/header.tmpl"),
            Self::Field => include_str!("../templates/field.tmpl"),
            Self::List => include_str!("../templates/list.tmpl"),
            Self::Map => include_str!("../templates/map.tmpl"),
            Self::Set => include_str!("../templates/set.tmpl"),
            Self::Struct => include_str!("../templates/struct.tmpl"),
            Self::StructEnd => include_str!("../templates/struct_end.tmpl"),
        }
    }

    const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(&'static str),
}

/// A parsed, validated template.
#[derive(Debug, Clone)]
pub struct Template {
    kind: TemplateKind,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses and validates a template of the given kind.
    ///
    /// # Errors
    /// Returns `TemplateError` on unbalanced braces or a placeholder the kind
    /// does not provide.
    pub fn parse(kind: TemplateKind, source: &str) -> Result<Self, TemplateError> {
        let template = kind.file_name();
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let offset = consumed + open;
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or(TemplateError::Unterminated { template, offset })?;

            let name = after[..close].trim();
            if name.is_empty() {
                return Err(TemplateError::EmptyPlaceholder { template, offset });
            }
            let known = kind
                .placeholders()
                .iter()
                .find(|p| **p == name)
                .ok_or_else(|| TemplateError::UnknownPlaceholder {
                    template,
                    name: name.to_string(),
                    expected: kind.placeholders().join(", "),
                })?;
            segments.push(Segment::Placeholder(*known));

            let advance = open + 2 + close + 2;
            consumed += advance;
            rest = &rest[advance..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { kind, segments })
    }

    /// Returns the kind of this template.
    #[must_use]
    pub const fn kind(&self) -> TemplateKind {
        self.kind
    }

    /// Returns the placeholder names used, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Renders the template, appending to `out`.
    ///
    /// # Errors
    /// Returns `TemplateError::MissingBinding` if `data` has no value for a
    /// placeholder used by the template.
    pub fn render(&self, data: &[(&str, &str)], out: &mut String) -> Result<(), TemplateError> {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = data
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| TemplateError::MissingBinding {
                            template: self.kind.file_name(),
                            name: (*name).to_string(),
                        })?;
                    out.push_str(value);
                }
            }
        }
        Ok(())
    }
}

/// The full set of templates a generator renders with.
#[derive(Debug, Clone)]
pub struct Templates {
    templates: Vec<Template>,
}

impl Templates {
    /// Returns the bundled templates, which emit Rust declarations.
    #[must_use]
    pub fn builtin() -> Self {
        let templates = TemplateKind::ALL
            .iter()
            .map(|kind| {
                Template::parse(*kind, kind.builtin_source())
                    .unwrap_or_else(|e| panic!("bundled template {kind} is invalid: {e}"))
            })
            .collect();
        Self { templates }
    }

    /// Builds templates from explicit sources, one per kind.
    ///
    /// # Errors
    /// Returns `TemplateError` if a kind is missing or a source is invalid.
    pub fn from_sources<I, S>(sources: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (TemplateKind, S)>,
        S: AsRef<str>,
    {
        let mut slots: Vec<Option<Template>> = vec![None; TemplateKind::ALL.len()];
        for (kind, source) in sources {
            slots[kind.index()] = Some(Template::parse(kind, source.as_ref())?);
        }

        let templates = TemplateKind::ALL
            .iter()
            .zip(slots)
            .map(|(kind, slot)| {
                slot.ok_or(TemplateError::MissingTemplate {
                    template: kind.file_name(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { templates })
    }

    /// Loads templates from a directory.
    ///
    /// Each kind is read from its [`TemplateKind::file_name`]; every kind
    /// must have a file.
    ///
    /// # Errors
    /// Returns `TemplateError::MissingTemplate` for the first kind with no
    /// file, or another `TemplateError` if a file cannot be read or is
    /// invalid.
    pub fn from_dir(dir: &Path) -> Result<Self, TemplateError> {
        Self::load_dir(dir, false)
    }

    /// Loads templates from a directory, using the bundled template for
    /// every kind with no file.
    ///
    /// # Errors
    /// Returns `TemplateError` if a file cannot be read or is invalid.
    pub fn from_dir_or_builtin(dir: &Path) -> Result<Self, TemplateError> {
        Self::load_dir(dir, true)
    }

    fn load_dir(dir: &Path, fill_with_builtin: bool) -> Result<Self, TemplateError> {
        let mut sources = Vec::with_capacity(TemplateKind::ALL.len());
        for kind in TemplateKind::ALL {
            let path = dir.join(kind.file_name());
            let source = if path.is_file() {
                debug!("loading template {}", path.display());
                std::fs::read_to_string(&path)
                    .map_err(|source| TemplateError::Io { path, source })?
            } else if fill_with_builtin {
                warn!("using bundled {} (not found in {})", kind, dir.display());
                kind.builtin_source().to_string()
            } else {
                return Err(TemplateError::MissingTemplate {
                    template: kind.file_name(),
                });
            };
            sources.push((kind, source));
        }
        Self::from_sources(sources)
    }

    /// Returns the template of the given kind.
    #[must_use]
    pub fn get(&self, kind: TemplateKind) -> &Template {
        &self.templates[kind.index()]
    }

    /// Renders the template of the given kind, appending to `out`.
    ///
    /// # Errors
    /// Returns `TemplateError` if a placeholder has no bound value.
    pub fn render(
        &self,
        kind: TemplateKind,
        data: &[(&str, &str)],
        out: &mut String,
    ) -> Result<(), TemplateError> {
        self.get(kind).render(data, out)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_templates_parse() {
        let templates = Templates::builtin();
        for kind in TemplateKind::ALL {
            assert_eq!(templates.get(kind).kind(), kind);
        }
    }

    #[test]
    fn test_render_list() {
        let template = Template::parse(
            TemplateKind::List,
            "pub struct {{StructName}}(Vec<{{ ElemName }}>);",
        )
        .expect("Failed to parse");

        let mut out = String::new();
        template
            .render(&[("StructName", "Int32List"), ("ElemName", "prim::Int32")], &mut out)
            .expect("Failed to render");
        assert_eq!(out, "pub struct Int32List(Vec<prim::Int32>);");
    }

    #[test]
    fn test_placeholders_in_order() {
        let template =
            Template::parse(TemplateKind::Map, "{{ValueName}} {{KeyName}} {{StructName}}")
                .expect("Failed to parse");
        let names: Vec<_> = template.placeholders().collect();
        assert_eq!(names, vec!["ValueName", "KeyName", "StructName"]);
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = Template::parse(TemplateKind::Set, "{{KeyName}}").unwrap_err();
        match err {
            TemplateError::UnknownPlaceholder { template, name, .. } => {
                assert_eq!(template, "set.tmpl");
                assert_eq!(name, "KeyName");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unterminated_placeholder() {
        let err = Template::parse(TemplateKind::Struct, "struct {{StructName").unwrap_err();
        assert!(matches!(err, TemplateError::Unterminated { offset: 7, .. }));
    }

    #[test]
    fn test_empty_placeholder() {
        let err = Template::parse(TemplateKind::Header, "x {{ }}").unwrap_err();
        assert!(matches!(err, TemplateError::EmptyPlaceholder { offset: 2, .. }));
    }

    #[test]
    fn test_missing_binding() {
        let template =
            Template::parse(TemplateKind::StructEnd, "}} // {{StructName}}").expect("parse");
        let mut out = String::new();
        let err = template.render(&[], &mut out).unwrap_err();
        assert!(matches!(err, TemplateError::MissingBinding { ref name, .. } if name == "StructName"));
    }

    #[test]
    fn test_from_sources_requires_every_kind() {
        let err = Templates::from_sources([(TemplateKind::Header, "// {{PackageName}}")])
            .unwrap_err();
        assert!(matches!(err, TemplateError::MissingTemplate { template: "field.tmpl" }));
    }

    #[test]
    fn test_from_sources() {
        let sources = TemplateKind::ALL.map(|kind| (kind, format!("<{}>", kind.file_name())));
        let templates = Templates::from_sources(sources).expect("Failed to build");

        let mut out = String::new();
        templates
            .render(TemplateKind::Map, &[], &mut out)
            .expect("Failed to render");
        assert_eq!(out, "<map.tmpl>");
    }

    fn write_all_templates(dir: &Path) {
        for kind in TemplateKind::ALL {
            std::fs::write(dir.join(kind.file_name()), format!("<{}>", kind.file_name()))
                .expect("write");
        }
    }

    #[test]
    fn test_from_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_all_templates(dir.path());

        let templates = Templates::from_dir(dir.path()).expect("Failed to load");
        let mut out = String::new();
        templates
            .render(TemplateKind::StructEnd, &[], &mut out)
            .expect("Failed to render");
        assert_eq!(out, "<struct_end.tmpl>");
    }

    #[test]
    fn test_from_dir_rejects_partial_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("header.tmpl"), "package {{PackageName}}\n")
            .expect("write");
        // misnamed, so struct.tmpl is still missing
        std::fs::write(dir.path().join("structs.tmpl"), "struct {{StructName}}\n")
            .expect("write");

        let err = Templates::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::MissingTemplate { template: "field.tmpl" }));

        write_all_templates(dir.path());
        std::fs::remove_file(dir.path().join("struct.tmpl")).expect("remove");
        let err = Templates::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::MissingTemplate { template: "struct.tmpl" }));
    }

    #[test]
    fn test_from_dir_or_builtin_fills_gaps() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("header.tmpl"), "// package {{PackageName}}\n")
            .expect("write");

        let templates = Templates::from_dir_or_builtin(dir.path()).expect("Failed to load");

        let mut out = String::new();
        templates
            .render(TemplateKind::Header, &[("PackageName", "geo")], &mut out)
            .expect("Failed to render");
        assert_eq!(out, "// package geo\n");

        let list: Vec<_> = templates.get(TemplateKind::List).placeholders().collect();
        assert!(list.contains(&"ElemName"));
    }

    #[test]
    fn test_from_dir_rejects_invalid_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_all_templates(dir.path());
        std::fs::write(dir.path().join("field.tmpl"), "{{ElemName}}").expect("write");

        let err = Templates::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownPlaceholder { template: "field.tmpl", .. }));
    }
}
