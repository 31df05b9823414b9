//! Captured response port

use restq_domain::Operand;
use thiserror::Error;

/// Errors raised while looking up a value in a response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocatorError {
    /// The lookup path cannot be interpreted.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// Path as written in the step.
        path: String,
        /// Failure description.
        reason: String,
    },
}

/// Port for the last HTTP response captured by the API client.
pub trait ResponseLocator: Send + Sync {
    /// HTTP status code.
    fn status_code(&self) -> u16;

    /// Round-trip time in milliseconds.
    fn timing(&self) -> f64;

    /// Whole response body, `undefined` when the response had none.
    fn body(&self) -> Operand;

    /// Value at `path` in the body. A missing node is `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is malformed.
    fn find_in_body(&self, path: &str) -> Result<Operand, LocatorError>;

    /// Value of header `name`. An absent header is `undefined`.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be read.
    fn find_in_header(&self, name: &str) -> Result<Operand, LocatorError>;

    /// Request label prefixed to every diagnostic, e.g. `[POST /users]`.
    fn prefix(&self) -> &str;
}
