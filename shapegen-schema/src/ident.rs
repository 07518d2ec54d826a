//! Identifier rules for generated declarations.
//!
//! Struct names are emitted verbatim as type names and field names are
//! mapped through [`field_ident`]. Validation uses the same rules, so a
//! schema that validates never emits a clashing identifier.

/// Module the bundled header declares primitive aliases in.
pub const PRIMITIVE_MODULE: &str = "prim";

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern", "false",
    "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
];

// Keywords that cannot be raw identifiers.
const PATH_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Returns true if `s` is a non-empty ASCII identifier.
#[must_use]
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns true if `s` is a Rust keyword, including path keywords.
#[must_use]
pub fn is_keyword(s: &str) -> bool {
    RUST_KEYWORDS.contains(&s) || PATH_KEYWORDS.contains(&s)
}

/// Returns true if `s` can name a generated struct.
///
/// The name must be an identifier, must not be a keyword, and must not
/// shadow the primitive module.
#[must_use]
pub fn is_type_name(s: &str) -> bool {
    is_identifier(s) && !is_keyword(s) && s != PRIMITIVE_MODULE
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 && !result.ends_with('_') {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Returns a Rust identifier for a schema field name.
///
/// The name is snake_cased, characters that cannot appear in an identifier
/// become `_`, and keywords are escaped.
#[must_use]
pub fn field_ident(name: &str) -> String {
    let mut ident: String = to_snake_case(name)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }

    if PATH_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        ident.insert_str(0, "r#");
    }
    ident
}
