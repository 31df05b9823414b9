//! Response header predicates.

use restq_domain::{DataTable, Operand};
use tracing::debug;

use super::report;
use crate::context::ScenarioContext;
use crate::error::StepOutcome;
use crate::locator::Location;

/// The response carries header `name`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn header_value_exist(ctx: &ScenarioContext, name: &str) -> StepOutcome {
    debug!(name, "headerValueExist");
    let response = ctx.response()?;
    let value = Location::Header(name).locate(response)?;
    let message = report(
        response,
        format_args!("The response header should contain the {name} property"),
    );
    ctx.assert()
        .not_strict_equal(value, Operand::Undefined, message)?;
    Ok(())
}

/// The response does not carry header `name`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn header_value_not_exist(ctx: &ScenarioContext, name: &str) -> StepOutcome {
    debug!(name, "headerValueNotExist");
    let response = ctx.response()?;
    let value = Location::Header(name).locate(response)?;
    let message = report(
        response,
        format_args!("The response header should not contain the {name} property"),
    );
    ctx.assert().strict_equal(value, Operand::Undefined, message)?;
    Ok(())
}

/// Header `name` equals `expected`.
///
/// # Errors
///
/// Returns the assertion failure, or the lookup error.
pub fn header_value_equal(ctx: &ScenarioContext, name: &str, expected: &str) -> StepOutcome {
    debug!(name, expected, "headerValueEqual");
    let response = ctx.response()?;
    let value = Location::Header(name).locate(response)?;
    let message = report(
        response,
        format_args!(
            "The response header is invalid, the {name} property should be {expected} but received {value}"
        ),
    );
    ctx.assert()
        .strict_equal(value, Operand::from(expected), message)?;
    Ok(())
}

/// Every `[name, value]` row of `table` matches a response header, in row order.
///
/// # Errors
///
/// Returns a malformed-table error before any comparison, or the first
/// failing comparison.
pub fn headers(ctx: &ScenarioContext, table: &DataTable) -> StepOutcome {
    debug!(rows = table.len(), "headers");
    for (name, expected) in table.pairs()? {
        header_value_equal(ctx, name, expected)?;
    }
    Ok(())
}
