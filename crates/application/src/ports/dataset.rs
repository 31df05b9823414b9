//! Dataset store port

use restq_domain::{Operand, ScenarioDescriptor};
use thiserror::Error;

/// Errors raised by a dataset store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// A placeholder references a key that holds no value.
    #[error("unknown dataset key: {0}")]
    UnknownKey(String),

    /// A key is empty or otherwise unusable.
    #[error("invalid dataset key: {0:?}")]
    InvalidKey(String),

    /// The scenario data could not be loaded.
    #[error("failed to load dataset for scenario '{scenario}': {reason}")]
    Load {
        /// Scenario name.
        scenario: String,
        /// Failure description.
        reason: String,
    },
}

/// Port for the key/value store used for templating.
///
/// The store owns the placeholder grammar: [`Dataset::get`] receives raw
/// strings, markers included.
pub trait Dataset: Send + Sync {
    /// Resolves a raw string (e.g. `{{ user.id }}`) to a value.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced key is unknown.
    fn get(&self, raw: &str) -> Result<Operand, DatasetError>;

    /// Stores a value under a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid.
    fn set(&mut self, key: &str, value: Operand) -> Result<(), DatasetError>;

    /// Seeds the store from the metadata of the scenario about to run.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario data cannot be loaded.
    fn parse(&mut self, scenario: &ScenarioDescriptor) -> Result<(), DatasetError>;
}
