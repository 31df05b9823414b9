//! Values compared by assertion predicates.
//!
//! An [`Operand`] is either a JSON value located in a response or the
//! `undefined` marker returned when a header is absent. `undefined` is never
//! equal to `null` or to the empty string.

use std::fmt;

use serde_json::{Number, Value};

/// A value located in a response, resolved from the dataset, or expected by a step.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Operand {
    /// Absence marker (e.g. a missing header or an empty body).
    #[default]
    Undefined,
    /// A JSON value, including `null`.
    Json(Value),
}

impl Operand {
    /// The `null` operand.
    #[must_use]
    pub const fn null() -> Self {
        Self::Json(Value::Null)
    }

    /// Returns true for the `undefined` marker.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns true for JSON `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// Returns true when the operand is a JSON array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Json(Value::Array(_)))
    }

    /// Returns the string content for string operands.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Json(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value for number operands.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Json(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the JSON value, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Undefined => None,
            Self::Json(v) => Some(v),
        }
    }

    /// JavaScript `typeof` name of this operand.
    #[must_use]
    pub const fn type_of(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Json(Value::Bool(_)) => "boolean",
            Self::Json(Value::Number(_)) => "number",
            Self::Json(Value::String(_)) => "string",
            Self::Json(Value::Null | Value::Array(_) | Value::Object(_)) => "object",
        }
    }

    /// Length of an array or a string, `undefined` for anything else.
    ///
    /// String length counts UTF-16 code units.
    #[must_use]
    pub fn length(&self) -> Self {
        match self {
            Self::Json(Value::Array(items)) => Self::from(items.len()),
            Self::Json(Value::String(s)) => Self::from(s.encode_utf16().count()),
            _ => Self::Undefined,
        }
    }

    /// Strict equality (`===`).
    ///
    /// Numbers compare by value, arrays and objects never compare equal.
    #[must_use]
    pub fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Json(a), Self::Json(b)) => match (a, b) {
                (Value::Null, Value::Null) => true,
                (Value::Bool(x), Value::Bool(y)) => x == y,
                (Value::String(x), Value::String(y)) => x == y,
                (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
                _ => false,
            },
            _ => false,
        }
    }

    /// Converts a numeric string into a number, leaving every other operand unchanged.
    #[must_use]
    pub fn coerce_number(self) -> Self {
        let Some(text) = self.as_str() else {
            return self;
        };
        let text = text.trim();
        if let Ok(int) = text.parse::<i64>() {
            return Self::from(int);
        }
        match text.parse::<f64>() {
            Ok(float) if float.is_finite() => Self::from(float),
            _ => self,
        }
    }
}

#[allow(clippy::float_cmp)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

fn fmt_json(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(float) => write!(f, "{float}"),
            None => write!(f, "{n}"),
        },
        Value::Number(n) => write!(f, "{n}"),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                // Array joining renders null elements as empty strings
                if !item.is_null() {
                    fmt_json(item, f)?;
                }
            }
            Ok(())
        }
        Value::Object(_) => f.write_str("[object Object]"),
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Json(v) => fmt_json(v, f),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Self::Json(Value::String(value.to_string()))
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Self::Json(Value::String(value))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Self::Json(Value::Bool(value))
    }
}

impl From<u16> for Operand {
    fn from(value: u16) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<u64> for Operand {
    fn from(value: u64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<usize> for Operand {
    fn from(value: usize) -> Self {
        Self::Json(Value::from(value))
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or_else(Self::null, |n| Self::Json(Value::Number(n)))
    }
}

impl<T: Into<Self>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_undefined_is_distinct_from_null_and_empty() {
        let undefined = Operand::Undefined;
        assert!(!undefined.strict_eq(&Operand::null()));
        assert!(!undefined.strict_eq(&Operand::from("")));
        assert!(undefined.strict_eq(&Operand::Undefined));
        assert!(Operand::null().strict_eq(&Operand::null()));
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(Operand::from(123_u64).strict_eq(&Operand::from(123.0)));
        assert!(Operand::from(-4_i64).strict_eq(&Operand::from(json!(-4))));
        assert!(!Operand::from(123_u64).strict_eq(&Operand::from("123")));
    }

    #[test]
    fn test_structures_are_never_strictly_equal() {
        let array = Operand::from(json!([1, 2]));
        assert!(!array.strict_eq(&array.clone()));
        let object = Operand::from(json!({"a": 1}));
        assert!(!object.strict_eq(&object.clone()));
    }

    #[test]
    fn test_display_follows_template_interpolation() {
        assert_eq!(Operand::Undefined.to_string(), "undefined");
        assert_eq!(Operand::null().to_string(), "null");
        assert_eq!(Operand::from("my value").to_string(), "my value");
        assert_eq!(Operand::from(1.0).to_string(), "1");
        assert_eq!(Operand::from(1.5).to_string(), "1.5");
        assert_eq!(Operand::from(json!([1, null, "a"])).to_string(), "1,,a");
        assert_eq!(Operand::from(json!({"a": 1})).to_string(), "[object Object]");
    }

    #[test]
    fn test_type_of() {
        assert_eq!(Operand::Undefined.type_of(), "undefined");
        assert_eq!(Operand::null().type_of(), "object");
        assert_eq!(Operand::from(json!([])).type_of(), "object");
        assert_eq!(Operand::from("x").type_of(), "string");
        assert_eq!(Operand::from(true).type_of(), "boolean");
        assert_eq!(Operand::from(3_u64).type_of(), "number");
    }

    #[test]
    fn test_length() {
        assert!(Operand::from(json!([1, 2, 3])).length().strict_eq(&Operand::from(3_usize)));
        assert!(Operand::from("abc").length().strict_eq(&Operand::from(3_usize)));
        assert!(Operand::from(json!({"a": 1})).length().is_undefined());
        assert!(Operand::Undefined.length().is_undefined());
    }

    #[test]
    fn test_coerce_number() {
        assert!(Operand::from("456").coerce_number().strict_eq(&Operand::from(456_i64)));
        assert!(Operand::from(" 4.5 ").coerce_number().strict_eq(&Operand::from(4.5)));
        assert_eq!(Operand::from("abc").coerce_number(), Operand::from("abc"));
        assert_eq!(Operand::from(true).coerce_number(), Operand::from(true));
    }

    #[test]
    fn test_from_option() {
        assert!(Operand::from(None::<String>).is_undefined());
        assert_eq!(Operand::from(Some("v")), Operand::from("v"));
    }
}
