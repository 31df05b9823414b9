//! In-process hook registrar.

use std::fmt;

use restq_application::ports::{HookOutcome, HookRegistrar, ScenarioHook, SuiteHook};
use restq_application::{ScenarioContext, StepError};
use restq_domain::ScenarioDescriptor;
use tracing::debug;

/// Number of hooks registered per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookCounts {
    /// Generic before-scenario hooks.
    pub before: usize,
    /// Tag-scoped before-scenario hooks.
    pub before_tagged: usize,
    /// Before-suite hooks.
    pub before_all: usize,
    /// After-scenario hooks.
    pub after: usize,
    /// After-suite hooks.
    pub after_all: usize,
}

/// Hook registrar that keeps hooks in registration order and runs them on demand.
#[derive(Default)]
pub struct HookTable {
    before: Vec<(Option<String>, ScenarioHook)>,
    before_all: Vec<SuiteHook>,
    after: Vec<ScenarioHook>,
    after_all: Vec<SuiteHook>,
}

impl HookTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered hooks per kind.
    #[must_use]
    pub fn counts(&self) -> HookCounts {
        let tagged = self.before.iter().filter(|(tag, _)| tag.is_some()).count();
        HookCounts {
            before: self.before.len() - tagged,
            before_tagged: tagged,
            before_all: self.before_all.len(),
            after: self.after.len(),
            after_all: self.after_all.len(),
        }
    }

    /// Tags of the tag-scoped before hooks, in registration order.
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        self.before
            .iter()
            .filter_map(|(tag, _)| tag.as_deref())
            .collect()
    }

    /// Runs the before hooks that apply to `scenario`, in registration order.
    ///
    /// Stops at the first hook returning [`HookOutcome::Skipped`].
    ///
    /// # Errors
    ///
    /// Returns the first hook error, unchanged.
    pub fn run_before(
        &self,
        ctx: &mut ScenarioContext,
        scenario: &ScenarioDescriptor,
    ) -> Result<HookOutcome, StepError> {
        for (tag, hook) in &self.before {
            if tag.as_deref().is_some_and(|tag| !scenario.has_tag(tag)) {
                continue;
            }
            if hook(&mut *ctx, scenario)? == HookOutcome::Skipped {
                debug!(scenario = %scenario.name, tag = ?tag, "before hook short-circuited");
                return Ok(HookOutcome::Skipped);
            }
        }
        Ok(HookOutcome::Continue)
    }

    /// Runs the after-scenario hooks.
    ///
    /// # Errors
    ///
    /// Returns the first hook error, unchanged.
    pub fn run_after(
        &self,
        ctx: &mut ScenarioContext,
        scenario: &ScenarioDescriptor,
    ) -> Result<(), StepError> {
        for hook in &self.after {
            hook(&mut *ctx, scenario)?;
        }
        Ok(())
    }

    /// Runs the before-suite hooks.
    ///
    /// # Errors
    ///
    /// Returns the first hook error, unchanged.
    pub fn run_before_all(&self) -> Result<(), StepError> {
        self.before_all.iter().try_for_each(|hook| hook())
    }

    /// Runs the after-suite hooks.
    ///
    /// # Errors
    ///
    /// Returns the first hook error, unchanged.
    pub fn run_after_all(&self) -> Result<(), StepError> {
        self.after_all.iter().try_for_each(|hook| hook())
    }
}

impl HookRegistrar for HookTable {
    fn before(&mut self, hook: ScenarioHook) {
        self.before.push((None, hook));
    }

    fn before_tagged(&mut self, tag: &str, hook: ScenarioHook) {
        self.before.push((Some(tag.to_string()), hook));
    }

    fn before_all(&mut self, hook: SuiteHook) {
        self.before_all.push(hook);
    }

    fn after(&mut self, hook: ScenarioHook) {
        self.after.push(hook);
    }

    fn after_all(&mut self, hook: SuiteHook) {
        self.after_all.push(hook);
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("counts", &self.counts())
            .field("tags", &self.tags())
            .finish()
    }
}
