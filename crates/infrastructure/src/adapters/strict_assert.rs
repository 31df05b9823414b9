//! Assertion primitives with strict equality semantics.

use restq_application::ports::Assert;
use restq_domain::{AssertOperator, AssertionError, Operand};
use tracing::trace;

/// Assertion primitives that fail with an [`AssertionError`] when their
/// condition does not hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictAssert;

impl StrictAssert {
    /// Creates the primitives.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Assert for StrictAssert {
    fn strict_equal(
        &self,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError> {
        trace!(%actual, %expected, "strictEqual");
        if actual.strict_eq(&expected) {
            Ok(())
        } else {
            Err(AssertionError::new(
                AssertOperator::StrictEqual,
                actual,
                expected,
                message,
            ))
        }
    }

    fn not_strict_equal(
        &self,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError> {
        trace!(%actual, %expected, "notStrictEqual");
        if actual.strict_eq(&expected) {
            Err(AssertionError::new(
                AssertOperator::NotStrictEqual,
                actual,
                expected,
                message,
            ))
        } else {
            Ok(())
        }
    }

    fn ok(&self, condition: bool, message: String) -> Result<(), AssertionError> {
        if condition {
            Ok(())
        } else {
            Err(AssertionError::new(
                AssertOperator::Ok,
                Operand::from(false),
                Operand::from(true),
                message,
            ))
        }
    }
}
