/// Canonical identifier for a schema structure name.
///
/// Strips leading underscores and upper-cases the first remaining character.
/// The result names both the generated structure and its profile factory.
///
/// # Examples
/// ```
/// use binparsegen_core::utils::normalize_name;
/// assert_eq!(normalize_name("_CM_KEY_NODE"), "CM_KEY_NODE");
/// assert_eq!(normalize_name("__list_entry"), "List_entry");
/// ```
pub fn normalize_name(name: &str) -> String {
    let trimmed = name.trim_start_matches('_');
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers either.
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Whether `name` can name a generated item (possibly as a raw identifier).
pub fn is_valid_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first.is_alphabetic()) {
        return false;
    }
    chars.all(|c| c == '_' || c.is_alphanumeric()) && !RESERVED.contains(&name)
}

/// Spell `name` as a Rust identifier, using `r#` for keywords.
pub fn escape_ident(name: &str) -> String {
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}
