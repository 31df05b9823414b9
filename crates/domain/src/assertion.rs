//! Assertion primitive failures.

use thiserror::Error;

use crate::operand::Operand;

/// The comparison performed by an assertion primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssertOperator {
    /// `actual === expected`
    StrictEqual,
    /// `actual !== expected`
    NotStrictEqual,
    /// `condition == true`
    Ok,
}

impl AssertOperator {
    /// Get the symbol for this operator.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::StrictEqual => "===",
            Self::NotStrictEqual => "!==",
            Self::Ok => "==",
        }
    }
}

/// Raised by an assertion primitive when its condition does not hold.
///
/// The display form is the predicate's message, already prefixed with the
/// request label.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct AssertionError {
    /// Comparison that failed.
    pub operator: AssertOperator,
    /// Value that was observed.
    pub actual: Operand,
    /// Value that was expected.
    pub expected: Operand,
    /// Diagnostic message.
    pub message: String,
}

impl AssertionError {
    /// Create a new assertion error.
    #[must_use]
    pub fn new(
        operator: AssertOperator,
        actual: Operand,
        expected: Operand,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operator,
            actual,
            expected,
            message: message.into(),
        }
    }

    /// One-line summary of the comparison, for reports.
    #[must_use]
    pub fn comparison(&self) -> String {
        format!("{} {} {}", self.actual, self.operator.symbol(), self.expected)
    }
}
