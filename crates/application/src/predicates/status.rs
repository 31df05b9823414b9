//! Status line and timing predicates.

use restq_domain::Operand;
use tracing::debug;

use super::report;
use crate::context::ScenarioContext;
use crate::error::StepOutcome;

/// The response status code equals `expected`.
///
/// # Errors
///
/// Returns the assertion failure, or [`crate::StepError::NoResponse`].
pub fn http_code(ctx: &ScenarioContext, expected: u16) -> StepOutcome {
    debug!(expected, "httpCode");
    let response = ctx.response()?;
    let actual = response.status_code();
    let message = report(
        response,
        format_args!("The response httpCode is invalid, received {actual} should be {expected}"),
    );
    ctx.assert()
        .strict_equal(Operand::from(actual), Operand::from(expected), message)?;
    Ok(())
}

/// The response arrived in strictly less than `max_ms` milliseconds.
///
/// # Errors
///
/// Returns the assertion failure, or [`crate::StepError::NoResponse`].
pub fn http_timing(ctx: &ScenarioContext, max_ms: f64) -> StepOutcome {
    debug!(max_ms, "httpTiming");
    let response = ctx.response()?;
    let timing = response.timing();
    let message = report(
        response,
        format_args!("The response time is invalid, received {timing} should be lower than {max_ms}"),
    );
    ctx.assert().ok(timing < max_ms, message)?;
    Ok(())
}
