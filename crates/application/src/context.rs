//! Scenario-scoped state shared by hooks and steps.

use std::fmt;
use std::sync::Arc;

use restq_domain::{AssertionSettings, DomainResult, TestConfig};

use crate::error::StepError;
use crate::ports::{Assert, Clock, Dataset, ResponseLocator};

/// HTTP client state visible to the predicates.
#[derive(Default)]
pub struct Api {
    /// Last captured response.
    pub response: Option<Box<dyn ResponseLocator>>,
}

/// Mutable state owned by the scenario currently executing.
///
/// Hooks and predicates receive it explicitly as their first argument.
pub struct ScenarioContext {
    config: Option<TestConfig>,
    /// Key/value store used for templating.
    pub data: Box<dyn Dataset>,
    /// HTTP client state.
    pub api: Api,
    /// Set when a tag short-circuited the scenario.
    pub skipped: bool,
    assert: Arc<dyn Assert>,
    clock: Arc<dyn Clock>,
}

impl ScenarioContext {
    /// Creates a context for a new scenario.
    #[must_use]
    pub fn new(data: Box<dyn Dataset>, assert: Arc<dyn Assert>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: None,
            data,
            api: Api::default(),
            skipped: false,
            assert,
            clock,
        }
    }

    /// Injects the suite configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn set_config(&mut self, config: TestConfig) -> DomainResult<()> {
        config.validate()?;
        self.config = Some(config);
        Ok(())
    }

    /// Returns the injected configuration, if any.
    #[must_use]
    pub const fn config(&self) -> Option<&TestConfig> {
        self.config.as_ref()
    }

    /// Settings for the assertion predicates, defaulted when no configuration was injected.
    #[must_use]
    pub fn assertion_settings(&self) -> AssertionSettings {
        self.config
            .as_ref()
            .map(|c| c.assertions)
            .unwrap_or_default()
    }

    /// Records the response the next predicates will inspect.
    pub fn set_response(&mut self, response: impl ResponseLocator + 'static) {
        self.api.response = Some(Box::new(response));
    }

    /// Returns the captured response.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NoResponse`] if nothing was captured yet.
    pub fn response(&self) -> Result<&dyn ResponseLocator, StepError> {
        self.api.response.as_deref().ok_or(StepError::NoResponse)
    }

    /// Assertion primitives.
    #[must_use]
    pub fn assert(&self) -> &dyn Assert {
        self.assert.as_ref()
    }

    /// Time source.
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl fmt::Debug for ScenarioContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScenarioContext")
            .field("config", &self.config)
            .field("skipped", &self.skipped)
            .field("has_response", &self.api.response.is_some())
            .finish_non_exhaustive()
    }
}
