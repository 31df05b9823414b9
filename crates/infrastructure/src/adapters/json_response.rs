//! Captured response backed by a JSON body.

use restq_application::ports::{LocatorError, ResponseLocator};
use restq_domain::Operand;
use serde_json::Value;

/// An HTTP response as handed over by the API client.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonResponse {
    prefix: String,
    status: u16,
    timing_ms: f64,
    headers: Vec<(String, String)>,
    body: Option<Value>,
}

impl JsonResponse {
    /// Creates a response to `method path` with no headers and no body.
    #[must_use]
    pub fn new(method: &str, path: &str, status: u16) -> Self {
        Self {
            prefix: format!("[{} {}]", method.to_uppercase(), path),
            status,
            timing_ms: 0.0,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set the round-trip time (builder pattern).
    #[must_use]
    pub const fn with_timing(mut self, timing_ms: f64) -> Self {
        self.timing_ms = timing_ms;
        self
    }

    /// Add a header (builder pattern).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set a JSON body (builder pattern).
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a raw body, parsed as JSON when possible (builder pattern).
    ///
    /// An empty text means no body.
    #[must_use]
    pub fn with_text(mut self, body: &str) -> Self {
        self.body = if body.trim().is_empty() {
            None
        } else {
            Some(serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string())))
        };
        self
    }
}

impl ResponseLocator for JsonResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn timing(&self) -> f64 {
        self.timing_ms
    }

    fn body(&self) -> Operand {
        self.body.clone().into()
    }

    fn find_in_body(&self, path: &str) -> Result<Operand, LocatorError> {
        let Some(body) = &self.body else {
            return Ok(Operand::null());
        };
        let found = query_json_path(body, path).map_err(|reason| LocatorError::InvalidPath {
            path: path.to_string(),
            reason,
        })?;
        Ok(found.map_or_else(Operand::null, Operand::from))
    }

    fn find_in_header(&self, name: &str) -> Result<Operand, LocatorError> {
        let values: Vec<&str> = self
            .headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect();
        if values.is_empty() {
            Ok(Operand::Undefined)
        } else {
            Ok(Operand::from(values.join(", ")))
        }
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// One step of a body path.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
    Wildcard,
}

/// Query a JSON value using a simple JSONPath-like syntax.
///
/// Supports `$`, `$.field`, `field.nested`, `$.array[0]`, `$.m[0][1]` and
/// `$.array[*].field`. A wildcard maps the rest of the path over every element
/// and collects the hits into an array.
fn query_json_path(json: &Value, path: &str) -> Result<Option<Value>, String> {
    let path = path.trim();
    let path = path.strip_prefix('$').unwrap_or(path);
    let segments = parse_path(path)?;
    Ok(select(json, &segments))
}

fn parse_path(path: &str) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut key = String::new();
    let mut chars = path.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '.' => push_key(&mut segments, &mut key),
            '[' => {
                push_key(&mut segments, &mut key);
                let mut inner = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    inner.push(c);
                }
                if !closed {
                    return Err(format!("unclosed bracket: [{inner}"));
                }
                segments.push(parse_index(inner.trim())?);
            }
            _ => key.push(ch),
        }
    }
    push_key(&mut segments, &mut key);

    Ok(segments)
}

fn push_key(segments: &mut Vec<Segment>, key: &mut String) {
    if !key.is_empty() {
        segments.push(Segment::Key(std::mem::take(key)));
    }
}

fn parse_index(inner: &str) -> Result<Segment, String> {
    if inner == "*" {
        return Ok(Segment::Wildcard);
    }
    inner
        .parse()
        .map(Segment::Index)
        .map_err(|_| format!("invalid array index: {inner}"))
}

fn select(value: &Value, segments: &[Segment]) -> Option<Value> {
    let Some((head, rest)) = segments.split_first() else {
        return Some(value.clone());
    };
    match head {
        Segment::Key(key) => select(value.get(key.as_str())?, rest),
        Segment::Index(index) => select(value.get(*index)?, rest),
        Segment::Wildcard => {
            let items: Vec<&Value> = match value {
                Value::Array(items) => items.iter().collect(),
                Value::Object(fields) => fields.values().collect(),
                _ => return None,
            };
            Some(Value::Array(
                items.into_iter().filter_map(|item| select(item, rest)).collect(),
            ))
        }
    }
}
