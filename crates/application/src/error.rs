//! Step error types

use restq_domain::{AssertionError, DomainError};
use thiserror::Error;

use crate::ports::{DatasetError, LocatorError};

/// Errors surfaced to the runner by predicates and hooks.
///
/// Collaborator errors are carried as-is; nothing here is recovered locally.
#[derive(Debug, Error)]
pub enum StepError {
    /// An assertion primitive rejected the comparison.
    #[error(transparent)]
    Assertion(#[from] AssertionError),

    /// The dataset store failed.
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// A response lookup failed.
    #[error("locator error: {0}")]
    Locator(#[from] LocatorError),

    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A predicate ran before any response was captured.
    #[error("no response has been captured in this scenario")]
    NoResponse,

    /// A regular expression does not compile.
    #[error("invalid regexp '{pattern}': {source}")]
    InvalidPattern {
        /// Pattern as written in the step.
        pattern: String,
        /// Compilation error.
        #[source]
        source: regex::Error,
    },

    /// No catalog entry matches the step text.
    #[error("no step definition matches: {0}")]
    UnknownStep(String),

    /// A step argument could not be converted.
    #[error("invalid argument in step '{step}': {reason}")]
    InvalidArgument {
        /// Step text.
        step: String,
        /// Failure description.
        reason: String,
    },

    /// A step expecting a data table was given none.
    #[error("step '{0}' requires a data table")]
    MissingTable(String),
}

impl StepError {
    /// Returns true for assertion failures, as opposed to collaborator errors.
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(self, Self::Assertion(_))
    }
}

/// Result type alias for predicate and hook invocations.
pub type StepOutcome<T = ()> = Result<T, StepError>;
