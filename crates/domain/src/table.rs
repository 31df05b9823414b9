//! Tabular step arguments.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A Gherkin data table attached to a step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataTable {
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create a table from raw rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Create a two-column table from key/value pairs.
    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rows: pairs
                .into_iter()
                .map(|(k, v)| vec![k.into(), v.into()])
                .collect(),
        }
    }

    /// Raw rows, in declaration order.
    #[must_use]
    pub fn raw(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Rows as key/value pairs.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MalformedTable`] for the first row that does not
    /// hold exactly two cells.
    pub fn pairs(&self) -> DomainResult<Vec<(&str, &str)>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| match cells.as_slice() {
                [key, value] => Ok((key.as_str(), value.as_str())),
                _ => Err(DomainError::MalformedTable {
                    row,
                    cells: cells.len(),
                }),
            })
            .collect()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
