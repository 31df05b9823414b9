//! In-memory dataset store

use std::collections::{BTreeMap, HashMap};

use restq_application::ports::{Dataset, DatasetError};
use restq_application::template;
use restq_domain::{Operand, ScenarioDescriptor};
use tracing::{debug, trace};

/// Dataset store keeping scenario values in memory.
///
/// Fixtures registered per scenario name are copied into the store each time
/// that scenario starts, followed by the scenario's examples row.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    values: HashMap<String, Operand>,
    fixtures: HashMap<String, BTreeMap<String, Operand>>,
}

impl InMemoryDataset {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a value seeded into every run of `scenario` (builder pattern).
    #[must_use]
    pub fn with_fixture(
        mut self,
        scenario: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Operand>,
    ) -> Self {
        self.fixtures
            .entry(scenario.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Value stored under `key`, if any.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Operand> {
        self.values.get(key)
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the store holds no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Dataset for InMemoryDataset {
    fn get(&self, raw: &str) -> Result<Operand, DatasetError> {
        template::render(raw, |key| self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Operand) -> Result<(), DatasetError> {
        let key = template::placeholder_key(key).unwrap_or_else(|| key.trim().to_string());
        if key.is_empty() {
            return Err(DatasetError::InvalidKey(key));
        }
        trace!(%key, %value, "dataset set");
        self.values.insert(key, value);
        Ok(())
    }

    fn parse(&mut self, scenario: &ScenarioDescriptor) -> Result<(), DatasetError> {
        self.values.clear();
        if let Some(fixture) = self.fixtures.get(&scenario.name) {
            self.values
                .extend(fixture.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        self.values.extend(
            scenario
                .examples
                .iter()
                .map(|(k, v)| (k.clone(), Operand::from(v.as_str()))),
        );
        debug!(scenario = %scenario.name, values = self.values.len(), "dataset seeded");
        Ok(())
    }
}
