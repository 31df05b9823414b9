//! Runner hook registration port

use restq_domain::ScenarioDescriptor;

use crate::context::ScenarioContext;
use crate::error::StepError;

/// Value returned by a scenario hook to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookOutcome {
    /// Carry on with the scenario.
    Continue,
    /// Do not execute the remaining steps of the scenario.
    Skipped,
}

impl HookOutcome {
    /// Sentinel understood by the runner, if any.
    #[must_use]
    pub const fn sentinel(&self) -> Option<&'static str> {
        match self {
            Self::Continue => None,
            Self::Skipped => Some("skipped"),
        }
    }
}

/// Callback run around a scenario, with the scenario context as receiver.
pub type ScenarioHook = Box<
    dyn Fn(&mut ScenarioContext, &ScenarioDescriptor) -> Result<HookOutcome, StepError>
        + Send
        + Sync,
>;

/// Callback run once around the whole suite.
pub type SuiteHook = Box<dyn Fn() -> Result<(), StepError> + Send + Sync>;

/// Port for the BDD runner's hook registration functions.
pub trait HookRegistrar {
    /// Registers a hook run before every scenario.
    fn before(&mut self, hook: ScenarioHook);

    /// Registers a hook run before scenarios carrying `tag`.
    fn before_tagged(&mut self, tag: &str, hook: ScenarioHook);

    /// Registers a hook run once before the suite.
    fn before_all(&mut self, hook: SuiteHook);

    /// Registers a hook run after every scenario.
    fn after(&mut self, hook: ScenarioHook);

    /// Registers a hook run once after the suite.
    fn after_all(&mut self, hook: SuiteHook);
}
