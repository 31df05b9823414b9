//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The test configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A step table row does not hold exactly a key and a value.
    #[error("malformed table row {row}: expected 2 cells, found {cells}")]
    MalformedTable {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found in the row.
        cells: usize,
    },
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
