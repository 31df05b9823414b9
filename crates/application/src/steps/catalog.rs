//! Step text to predicate bindings.
//!
//! Bindings are written as cucumber expressions and compiled once when the
//! catalog is built. Supported parameter types are `{int}`, `{float}`,
//! `{word}` and `{string}` (single or double quoted).

use std::str::FromStr;

use regex::Regex;
use restq_domain::DataTable;
use tracing::{debug, trace};

use super::ThenStep;
use crate::error::StepError;

/// Gherkin keywords accepted in front of step text.
const KEYWORDS: [&str; 6] = ["Given ", "When ", "Then ", "And ", "But ", "* "];

type Builder = fn(&Arguments<'_>) -> Result<ThenStep, StepError>;

/// Bindings in catalog order: expression, predicate name, builder.
const BINDINGS: &[(&str, &str, Builder)] = &[
    ("the response status should be {int}", "httpCode", |a| {
        Ok(ThenStep::HttpCode { expected: a.parse(0)? })
    }),
    ("the response time should be lower than {float} ms", "httpTiming", |a| {
        Ok(ThenStep::HttpTiming { max_ms: a.parse(0)? })
    }),
    ("the response headers should contain {string}", "headerValueExist", |a| {
        Ok(ThenStep::HeaderValueExist { name: a.text(0)? })
    }),
    ("the response headers should not contain {string}", "headerValueNotExist", |a| {
        Ok(ThenStep::HeaderValueNotExist { name: a.text(0)? })
    }),
    ("the response header {string} should be {string}", "headerValueEqual", |a| {
        Ok(ThenStep::HeaderValueEqual {
            name: a.text(0)?,
            expected: a.text(1)?,
        })
    }),
    ("the response headers should be:", "headers", |a| {
        Ok(ThenStep::Headers { table: a.table()? })
    }),
    ("the response list should be empty", "shouldBeEmptyArrayResponse", |_| {
        Ok(ThenStep::ShouldBeEmptyArrayResponse)
    }),
    ("the response list should not be empty", "shouldNotBeEmptyArrayResponse", |_| {
        Ok(ThenStep::ShouldNotBeEmptyArrayResponse)
    }),
    ("the response body should be empty", "shouldBeEmptyResponse", |_| {
        Ok(ThenStep::ShouldBeEmptyResponse)
    }),
    ("the response body at {string} should equal {float}", "shouldBeNumber", |a| {
        Ok(ThenStep::ShouldBeNumber {
            path: a.text(0)?,
            expected: a.text(1)?,
        })
    }),
    ("the response body at {string} should equal the number {string}", "shouldBeNumber", |a| {
        Ok(ThenStep::ShouldBeNumber {
            path: a.text(0)?,
            expected: a.text(1)?,
        })
    }),
    ("the response body at {string} should be true", "shouldBeTrue", |a| {
        Ok(ThenStep::ShouldBeTrue { path: a.text(0)? })
    }),
    ("the response body at {string} should be false", "shouldBeFalse", |a| {
        Ok(ThenStep::ShouldBeFalse { path: a.text(0)? })
    }),
    ("the response body at {string} should be null", "shouldBeNull", |a| {
        Ok(ThenStep::ShouldBeNull { path: a.text(0)? })
    }),
    ("the response body at {string} should equal {string}", "shouldBeString", |a| {
        Ok(ThenStep::ShouldBeString {
            path: a.text(0)?,
            expected: a.text(1)?,
        })
    }),
    ("the response body at {string} should be empty", "shouldBeEmpty", |a| {
        Ok(ThenStep::ShouldBeEmpty { path: a.text(0)? })
    }),
    ("the response body at {string} should not be null", "shouldNotBeNull", |a| {
        Ok(ThenStep::ShouldNotBeNull { path: a.text(0)? })
    }),
    ("the response list should contain {int} items", "shouldBeArraySize", |a| {
        Ok(ThenStep::ShouldBeArraySize { size: a.parse(0)? })
    }),
    ("the response body at {string} should be an array", "shouldBeAnArray", |a| {
        Ok(ThenStep::ShouldBeAnArray { path: a.text(0)? })
    }),
    ("the response body at {string} should be an array of {int} items", "shouldBeAnArrayOfXItems", |a| {
        Ok(ThenStep::ShouldBeAnArrayOfXItems {
            path: a.text(0)?,
            size: a.parse(1)?,
        })
    }),
    ("the response body at {string} should match {string}", "shouldMatch", |a| {
        Ok(ThenStep::ShouldMatch {
            path: a.text(0)?,
            pattern: a.text(1)?,
        })
    }),
    ("the response body at {string} should be close to now", "shouldBeNow", |a| {
        Ok(ThenStep::ShouldBeNow { path: a.text(0)? })
    }),
    ("add the header {string} to the dataset as {string}", "addHeaderPropertyToDataset", |a| {
        Ok(ThenStep::AddHeaderPropertyToDataset {
            name: a.text(0)?,
            key: a.text(1)?,
        })
    }),
    ("add the body property {string} to the dataset as {string}", "addBodyPropertyToDataset", |a| {
        Ok(ThenStep::AddBodyPropertyToDataset {
            path: a.text(0)?,
            key: a.text(1)?,
        })
    }),
];

/// One compiled binding.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    /// Cucumber expression the binding was declared with.
    pub expression: &'static str,
    /// Name of the predicate the binding produces.
    pub predicate: &'static str,
    regex: Regex,
    build: Builder,
}

/// Captured arguments of a matched step.
struct Arguments<'a> {
    step: &'a str,
    values: Vec<&'a str>,
    table: Option<&'a DataTable>,
}

impl Arguments<'_> {
    fn text(&self, index: usize) -> Result<String, StepError> {
        self.values
            .get(index)
            .map(|value| (*value).to_string())
            .ok_or_else(|| self.invalid(format!("missing argument {index}")))
    }

    fn parse<T>(&self, index: usize) -> Result<T, StepError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.text(index)?;
        raw.parse()
            .map_err(|err| self.invalid(format!("cannot convert '{raw}': {err}")))
    }

    fn table(&self) -> Result<DataTable, StepError> {
        self.table
            .cloned()
            .ok_or_else(|| StepError::MissingTable(self.step.to_string()))
    }

    fn invalid(&self, reason: String) -> StepError {
        StepError::InvalidArgument {
            step: self.step.to_string(),
            reason,
        }
    }
}

/// The static set of "Then" step bindings.
#[derive(Debug, Clone)]
pub struct StepCatalog {
    definitions: Vec<StepDefinition>,
}

impl StepCatalog {
    /// Compiles every binding.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::InvalidPattern`] if a binding does not compile.
    pub fn new() -> Result<Self, StepError> {
        let definitions = BINDINGS
            .iter()
            .map(|&(expression, predicate, build)| {
                Ok(StepDefinition {
                    expression,
                    predicate,
                    regex: compile_expression(expression)?,
                    build,
                })
            })
            .collect::<Result<Vec<_>, StepError>>()?;
        debug!(count = definitions.len(), "step catalog compiled");
        Ok(Self { definitions })
    }

    /// Compiled bindings, in catalog order.
    #[must_use]
    pub fn definitions(&self) -> &[StepDefinition] {
        &self.definitions
    }

    /// Predicate names reachable from the catalog, in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::with_capacity(self.definitions.len());
        for definition in &self.definitions {
            if names.last() != Some(&definition.predicate) {
                names.push(definition.predicate);
            }
        }
        names
    }

    /// Binds step text (with or without a leading Gherkin keyword) to a step.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::UnknownStep`] when no binding matches, or the
    /// argument conversion error of the matching binding.
    pub fn parse(&self, text: &str, table: Option<&DataTable>) -> Result<ThenStep, StepError> {
        let step = strip_keyword(text.trim());
        for definition in &self.definitions {
            if let Some(captures) = definition.regex.captures(step) {
                trace!(step, expression = definition.expression, "step matched");
                let arguments = Arguments {
                    step,
                    values: captures
                        .iter()
                        .skip(1)
                        .flatten()
                        .map(|m| m.as_str())
                        .collect(),
                    table,
                };
                return (definition.build)(&arguments);
            }
        }
        Err(StepError::UnknownStep(step.to_string()))
    }
}

fn strip_keyword(step: &str) -> &str {
    KEYWORDS
        .iter()
        .find_map(|keyword| step.strip_prefix(keyword))
        .map_or(step, str::trim_start)
}

fn parameter_pattern(name: &str) -> Option<&'static str> {
    match name {
        "int" => Some(r"(-?\d+)"),
        "float" => Some(r"(-?\d*\.?\d+)"),
        "word" => Some(r"([^\s]+)"),
        "string" => Some(r#"(?:"([^"]*)"|'([^']*)')"#),
        _ => None,
    }
}

/// Turns a cucumber expression into an anchored regular expression.
fn compile_expression(expression: &str) -> Result<Regex, StepError> {
    let mut source = String::from("^");
    let mut rest = expression;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        source.push_str(&regex::escape(&rest[..start]));
        match parameter_pattern(name) {
            Some(pattern) => source.push_str(pattern),
            None => source.push_str(&regex::escape(&rest[start..=start + len])),
        }
        rest = &rest[start + len + 1..];
    }
    source.push_str(&regex::escape(rest));
    source.push('$');
    Regex::new(&source).map_err(|source| StepError::InvalidPattern {
        pattern: expression.to_string(),
        source,
    })
}
