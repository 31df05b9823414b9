//! Placeholder parser for `{{name}}` syntax
//!
//! Parses strings to extract placeholder references with their positions.

use std::ops::Range;

/// A placeholder reference found in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// The key (without `{{ }}`, trimmed).
    pub name: String,

    /// Byte range in the original string, markers included.
    pub span: Range<usize>,
}

impl Placeholder {
    /// Creates a new placeholder reference.
    #[must_use]
    pub fn new(name: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// Parses a string and extracts all placeholder references.
///
/// # Examples
///
/// ```
/// use restq_application::template::parser::parse_placeholders;
///
/// let refs = parse_placeholders("user {{ user.id }} at {{host}}");
/// assert_eq!(refs.len(), 2);
/// assert_eq!(refs[0].name, "user.id");
/// assert_eq!(refs[1].name, "host");
/// ```
#[must_use]
pub fn parse_placeholders(input: &str) -> Vec<Placeholder> {
    let mut references = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch != '{' || !matches!(chars.peek(), Some((_, '{'))) {
            continue;
        }
        chars.next(); // consume second {
        let start = i;
        let mut name = String::new();
        let mut found_end = false;

        while let Some((_, ch)) = chars.next() {
            if ch == '}' {
                if let Some(&(end_idx, '}')) = chars.peek() {
                    chars.next(); // consume second }
                    let trimmed = name.trim();
                    if !trimmed.is_empty() {
                        references.push(Placeholder::new(trimmed, start..end_idx + 1));
                    }
                    found_end = true;
                    break;
                }
            }
            name.push(ch);
        }

        // Unclosed marker: nothing after it can be a placeholder
        if !found_end {
            break;
        }
    }

    references
}
