//! Assertion primitive port

use restq_domain::{AssertionError, Operand};

/// Port for the assertion primitives predicates delegate their judgement to.
///
/// Each method fails with an [`AssertionError`] carrying the supplied message
/// when its condition does not hold. Predicates never inspect the error.
pub trait Assert: Send + Sync {
    /// Asserts `actual === expected`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionError`] when the operands differ.
    fn strict_equal(
        &self,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError>;

    /// Asserts `actual !== expected`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionError`] when the operands are equal.
    fn not_strict_equal(
        &self,
        actual: Operand,
        expected: Operand,
        message: String,
    ) -> Result<(), AssertionError>;

    /// Asserts that `condition` holds.
    ///
    /// # Errors
    ///
    /// Returns an [`AssertionError`] when `condition` is false.
    fn ok(&self, condition: bool, message: String) -> Result<(), AssertionError>;
}
