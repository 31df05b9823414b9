//! Response body predicates.

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use restq_domain::Operand;
use serde_json::Value;
use tracing::debug;

use super::report;
use crate::context::ScenarioContext;
use crate::error::{StepError, StepOutcome};
use crate::locator::Location;
use crate::template;

/// The response body is an empty array.
///
/// # Errors
///
/// Returns the assertion failure, or [`StepError::NoResponse`].
pub fn should_be_empty_array_response(ctx: &ScenarioContext) -> StepOutcome {
    debug!("shouldBeEmptyArrayResponse");
    let response = ctx.response()?;
    let len = Location::Body.length(response)?;
    let message = report(
        response,
        format_args!(
            "The response body should return an empty array, but received an array with {len} items"
        ),
    );
    ctx.assert().strict_equal(len, Operand::from(0_usize), message)?;
    Ok(())
}

/// The response body is a non-empty array.
///
/// # Errors
///
/// Returns the assertion failure, or [`StepError::NoResponse`].
pub fn should_not_be_empty_array_response(ctx: &ScenarioContext) -> StepOutcome {
    debug!("shouldNotBeEmptyArrayResponse");
    let response = ctx.response()?;
    let len = Location::Body.length(response)?;
    let message = report(
        response,
        format_args!(
            "The response body should return an array containing items, but received an array with {len} items"
        ),
    );
    ctx.assert()
        .not_strict_equal(len, Operand::from(0_usize), message)?;
    Ok(())
}

/// The response has no body.
///
/// # Errors
///
/// Returns the assertion failure, or [`StepError::NoResponse`].
pub fn should_be_empty_response(ctx: &ScenarioContext) -> StepOutcome {
    debug!("shouldBeEmptyResponse");
    let response = ctx.response()?;
    let body = Location::Body.locate(response)?;
    let message = report(response, "The response body should be empty");
    ctx.assert().strict_equal(body, Operand::Undefined, message)?;
    Ok(())
}

/// The body property at `path` equals the number `expected` refers to.
///
/// `expected` is a literal or a `{{ key }}` placeholder; numeric strings are
/// compared as numbers.
///
/// # Errors
///
/// Returns the assertion failure, or the dataset or lookup error.
pub fn should_be_number(ctx: &ScenarioContext, path: &str, expected: &str) -> StepOutcome {
    debug!(path, expected, "shouldBeNumber");
    let response = ctx.response()?;
    let expected = template::resolve(ctx.data.as_ref(), expected)?.coerce_number();
    let actual = Location::BodyPath(path).locate(response)?;
    let message = report(
        response,
        format_args!("The response body property {path} should be {expected} but received {actual}"),
    );
    ctx.assert().strict_equal(actual, expected, message)?;
    Ok(())
}

/// The body property at `path` is `true`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_true(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldBeTrue");
    property_equals(ctx, path, Operand::from(true))
}

/// The body property at `path` is `false`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_false(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldBeFalse");
    property_equals(ctx, path, Operand::from(false))
}

/// The body property at `path` is `null`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_null(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldBeNull");
    property_equals(ctx, path, Operand::null())
}

/// The body property at `path` equals the string `expected` refers to.
///
/// When the resolved value is the text `true`, `false` or `null` the check is
/// redirected to [`should_be_true`], [`should_be_false`] or [`should_be_null`],
/// so a step cannot assert those three words as plain strings.
///
/// # Errors
///
/// Returns the assertion failure, or the dataset or lookup error.
pub fn should_be_string(ctx: &ScenarioContext, path: &str, expected: &str) -> StepOutcome {
    debug!(path, expected, "shouldBeString");
    let expected = template::resolve(ctx.data.as_ref(), expected)?;
    match expected.as_str() {
        Some("true") => return should_be_true(ctx, path),
        Some("false") => return should_be_false(ctx, path),
        Some("null") => return should_be_null(ctx, path),
        _ => {}
    }
    property_equals(ctx, path, expected)
}

/// The body property at `path` is the empty string.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_empty(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldBeEmpty");
    let response = ctx.response()?;
    let actual = Location::BodyPath(path).locate(response)?;
    let message = report(
        response,
        format_args!("The response body property {path} should be empty but received {actual}"),
    );
    ctx.assert().strict_equal(actual, Operand::from(""), message)?;
    Ok(())
}

/// The body property at `path` is not `null`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_not_be_null(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldNotBeNull");
    let response = ctx.response()?;
    let actual = Location::BodyPath(path).locate(response)?;
    // The comparison only fails on null, so the message always reports it.
    let message = report(
        response,
        format_args!("The response body property {path} should not be null but received null"),
    );
    ctx.assert().not_strict_equal(actual, Operand::null(), message)?;
    Ok(())
}

/// The response body is an array of `size` items.
///
/// # Errors
///
/// Returns the assertion failure, or [`StepError::NoResponse`].
pub fn should_be_array_size(ctx: &ScenarioContext, size: usize) -> StepOutcome {
    debug!(size, "shouldBeArraySize");
    let response = ctx.response()?;
    let len = Location::Body.length(response)?;
    let message = report(
        response,
        format_args!(
            "The response body property should contain an array of {size} items but received an array of {len} items"
        ),
    );
    ctx.assert().strict_equal(len, Operand::from(size), message)?;
    Ok(())
}

/// The body property at `path` is an array.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_an_array(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldBeAnArray");
    let response = ctx.response()?;
    let actual = Location::BodyPath(path).locate(response)?;
    let message = report(
        response,
        format_args!(
            "The response body property should contain an array but received a {} ({actual})",
            actual.type_of()
        ),
    );
    ctx.assert().ok(actual.is_array(), message)?;
    Ok(())
}

/// The body property at `path` is an array of `size` items.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_an_array_of_x_items(ctx: &ScenarioContext, path: &str, size: usize) -> StepOutcome {
    debug!(path, size, "shouldBeAnArrayOfXItems");
    let response = ctx.response()?;
    let len = Location::BodyPath(path).length(response)?;
    let message = report(
        response,
        format_args!(
            "The response body property {path} should contain an array of {size} but received {len} item(s)"
        ),
    );
    ctx.assert().strict_equal(len, Operand::from(size), message)?;
    Ok(())
}

/// The body property at `path` matches `pattern`.
///
/// `pattern` may be written bare (`^abc$`) or slash-delimited (`/^abc$/`);
/// both compile to the same expression.
///
/// # Errors
///
/// Returns [`StepError::InvalidPattern`] when the expression does not compile,
/// the assertion failure, or the lookup error.
pub fn should_match(ctx: &ScenarioContext, path: &str, pattern: &str) -> StepOutcome {
    debug!(path, pattern, "shouldMatch");
    let response = ctx.response()?;
    let regex = compile_pattern(pattern)?;
    let actual = Location::BodyPath(path).locate(response)?;
    let message = report(
        response,
        format_args!(
            "The response body property {path} should match the regexp {pattern} but received : {actual}"
        ),
    );
    ctx.assert().ok(regex.is_match(&actual.to_string()), message)?;
    Ok(())
}

/// The body property at `path` is a timestamp close to the current time.
///
/// The tolerance is inclusive and comes from the assertion settings of the
/// injected configuration.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn should_be_now(ctx: &ScenarioContext, path: &str) -> StepOutcome {
    debug!(path, "shouldBeNow");
    let response = ctx.response()?;
    let actual = Location::BodyPath(path).locate(response)?;
    let tolerance = ctx.assertion_settings().now_tolerance();
    let close = parse_timestamp(&actual)
        .is_some_and(|at| ctx.clock().distance_from_now(at) <= tolerance);
    let message = report(
        response,
        format_args!("The response body property {path} should be close to now, but received : {actual}"),
    );
    ctx.assert().ok(close, message)?;
    Ok(())
}

fn property_equals(ctx: &ScenarioContext, path: &str, expected: Operand) -> StepOutcome {
    let response = ctx.response()?;
    let actual = Location::BodyPath(path).locate(response)?;
    let message = report(
        response,
        format_args!("The response body property {path} should be {expected} but received {actual}"),
    );
    ctx.assert().strict_equal(actual, expected, message)?;
    Ok(())
}

fn compile_pattern(pattern: &str) -> Result<Regex, StepError> {
    let expr = pattern
        .strip_prefix('/')
        .and_then(|rest| rest.strip_suffix('/'))
        .unwrap_or(pattern);
    Regex::new(expr).map_err(|source| StepError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Offset-less layouts, read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Largest epoch offset a date can carry, in milliseconds.
const MAX_EPOCH_MS: f64 = 8.64e15;

/// Reads RFC 3339, RFC 2822 and offset-less ISO strings, or epoch
/// milliseconds (fractions allowed).
fn parse_timestamp(value: &Operand) -> Option<DateTime<Utc>> {
    match value.as_json()? {
        Value::String(text) => parse_timestamp_text(text.trim()),
        Value::Number(n) => match n.as_i64() {
            Some(ms) => DateTime::from_timestamp_millis(ms),
            None => from_fractional_millis(n.as_f64()?),
        },
        _ => None,
    }
}

fn parse_timestamp_text(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) =
        DateTime::parse_from_rfc3339(text).or_else(|_| DateTime::parse_from_rfc2822(text))
    {
        return Some(at.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|naive| naive.and_utc())
}

fn from_fractional_millis(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() || ms.abs() > MAX_EPOCH_MS {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let micros = (ms * 1000.0).round() as i64;
    DateTime::from_timestamp_micros(micros)
}
