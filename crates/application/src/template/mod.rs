//! Template resolution
//!
//! A step argument is either a literal or a `{{ key }}` placeholder naming a
//! value stored earlier in the scenario. Placeholders are looked up through the
//! dataset store, which receives the raw text, markers included.

pub mod parser;

use restq_domain::Operand;
use tracing::debug;

use crate::ports::{Dataset, DatasetError};

pub use parser::{Placeholder, parse_placeholders};

/// Returns the key of `raw` when the whole (trimmed) string is one placeholder.
#[must_use]
pub fn placeholder_key(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    match parse_placeholders(trimmed).as_slice() {
        [only] if only.span == (0..trimmed.len()) => Some(only.name.clone()),
        _ => None,
    }
}

/// Returns true when `raw` is a single `{{ key }}` placeholder.
#[must_use]
pub fn is_placeholder(raw: &str) -> bool {
    placeholder_key(raw).is_some()
}

/// Resolves a literal-or-placeholder step argument.
///
/// Placeholders are passed to [`Dataset::get`] unmodified; literals are
/// returned verbatim as strings.
///
/// # Errors
///
/// Propagates the dataset store's error.
pub fn resolve(data: &dyn Dataset, raw: &str) -> Result<Operand, DatasetError> {
    if is_placeholder(raw) {
        debug!(raw, "resolving placeholder through dataset");
        data.get(raw)
    } else {
        Ok(Operand::from(raw))
    }
}

/// Substitutes every placeholder of `input` using `lookup`.
///
/// A string that is exactly one placeholder yields the stored value with its
/// type preserved; otherwise the result is a string with each reference
/// replaced by the display form of its value.
///
/// # Errors
///
/// Returns [`DatasetError::UnknownKey`] for the first key `lookup` cannot resolve.
pub fn render<F>(input: &str, lookup: F) -> Result<Operand, DatasetError>
where
    F: Fn(&str) -> Option<Operand>,
{
    if let Some(key) = placeholder_key(input) {
        return lookup(&key).ok_or(DatasetError::UnknownKey(key));
    }

    let references = parse_placeholders(input);
    if references.is_empty() {
        return Ok(Operand::from(input));
    }

    let mut result = String::with_capacity(input.len());
    let mut last_end = 0;
    for reference in &references {
        result.push_str(&input[last_end..reference.span.start]);
        let value = lookup(&reference.name)
            .ok_or_else(|| DatasetError::UnknownKey(reference.name.clone()))?;
        result.push_str(&value.to_string());
        last_end = reference.span.end;
    }
    result.push_str(&input[last_end..]);

    Ok(Operand::from(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubDataset;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder("{{ val }}"));
        assert!(is_placeholder("  {{val}} "));
        assert!(!is_placeholder("true"));
        assert!(!is_placeholder("id-{{val}}"));
        assert!(!is_placeholder("{{a}}{{b}}"));
        assert_eq!(placeholder_key("{{ user.id }}"), Some("user.id".to_string()));
    }

    #[test]
    fn test_resolve_placeholder_passes_raw_text() {
        let data = StubDataset::returning(Operand::from(456_u64));
        let value = resolve(&data, "{{ val }}").unwrap();

        assert!(value.strict_eq(&Operand::from(456_u64)));
        assert_eq!(data.log().gets, vec!["{{ val }}".to_string()]);
    }

    #[test]
    fn test_resolve_literal_skips_dataset() {
        let data = StubDataset::returning(Operand::from("unused"));
        let value = resolve(&data, "my-value").unwrap();

        assert_eq!(value, Operand::from("my-value"));
        assert!(data.log().gets.is_empty());
    }

    #[test]
    fn test_render() {
        let lookup = |key: &str| match key {
            "id" => Some(Operand::from(42_u64)),
            "name" => Some(Operand::from("ada")),
            _ => None,
        };

        assert_eq!(render("{{ id }}", lookup).unwrap(), Operand::from(42_u64));
        assert_eq!(
            render("/users/{{id}}/{{ name }}", lookup).unwrap(),
            Operand::from("/users/42/ada")
        );
        assert_eq!(render("plain", lookup).unwrap(), Operand::from("plain"));
        assert_eq!(
            render("{{missing}}", lookup),
            Err(DatasetError::UnknownKey("missing".to_string()))
        );
    }
}
