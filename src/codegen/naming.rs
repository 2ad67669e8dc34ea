//! Identifier derivation for generated code.

use std::collections::BTreeSet;

/// Strict and reserved keywords of Rust 2024.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// How identifiers that collide with reserved words are rewritten.
///
/// ```rust
/// use dynamodb_schema::codegen::naming::EscapePolicy;
///
/// let policy = EscapePolicy::rust().with_words(["level"]);
/// assert_eq!(policy.escape("type"), "type_");
/// assert_eq!(policy.escape("level"), "level_");
/// assert_eq!(policy.escape("side"), "side");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscapePolicy {
    /// Words that cannot be used as identifiers.
    pub reserved: BTreeSet<String>,
    /// Suffix appended to a reserved word.
    pub suffix: String,
}

impl EscapePolicy {
    /// Rust keywords, escaped with a trailing underscore.
    pub fn rust() -> Self {
        Self {
            reserved: RUST_KEYWORDS.iter().map(|word| word.to_string()).collect(),
            suffix: "_".to_string(),
        }
    }

    /// Reserve additional words.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(words.into_iter().map(Into::into));
        self
    }

    /// Replace the escape suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// `ident`, suffixed when it is reserved.
    pub fn escape(&self, ident: &str) -> String {
        if self.reserved.contains(ident) {
            format!("{ident}{}", self.suffix)
        } else {
            ident.to_string()
        }
    }
}

impl Default for EscapePolicy {
    fn default() -> Self {
        Self::rust()
    }
}

fn words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;
    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
            continue;
        }
        let boundary = c.is_ascii_uppercase()
            && previous.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        previous = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `created_at` and `created-at` become `CreatedAt`.
pub fn to_camel_case(name: &str) -> String {
    words(name)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// `createdAt` and `created-at` become `created_at`.
pub fn to_snake_case(name: &str) -> String {
    let snake = words(name)
        .iter()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_");
    match snake.chars().next() {
        Some(first) if first.is_ascii_digit() => format!("_{snake}"),
        _ => snake,
    }
}

/// `IndexSide` becomes `INDEX_SIDE`.
pub fn to_screaming_snake_case(name: &str) -> String {
    to_snake_case(name).to_ascii_uppercase()
}
