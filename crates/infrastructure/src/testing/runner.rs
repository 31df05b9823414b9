//! Scenario runner implementation.
//!
//! Runs the before hooks, binds every step line through the catalog,
//! executes it against the scenario context and produces a report.

use std::time::Instant;

use restq_application::ports::HookOutcome;
use restq_application::{ScenarioContext, StepCatalog, StepError};
use restq_domain::{DataTable, ScenarioDescriptor, ScenarioReport, StepResult};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::HookTable;

/// Label of the report entry recording a before hook failure.
const BEFORE_HOOKS: &str = "Before";
/// Label of the report entry recording an after hook failure.
const AFTER_HOOKS: &str = "After";

/// One step of a scenario, as read from the feature file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLine {
    /// Step text, with or without its Gherkin keyword.
    pub text: String,
    /// Data table attached to the step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<DataTable>,
}

impl StepLine {
    /// Create a step without a table.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            table: None,
        }
    }

    /// Attach a data table (builder pattern).
    #[must_use]
    pub fn with_table(mut self, table: DataTable) -> Self {
        self.table = Some(table);
        self
    }
}

/// Runs scenarios one at a time against the registered hooks and step catalog.
#[derive(Debug)]
pub struct ScenarioRunner {
    catalog: StepCatalog,
    hooks: HookTable,
}

impl ScenarioRunner {
    /// Create a runner over the given hooks.
    ///
    /// # Errors
    ///
    /// Returns an error if the step catalog fails to compile.
    pub fn new(hooks: HookTable) -> Result<Self, StepError> {
        Ok(Self {
            catalog: StepCatalog::new()?,
            hooks,
        })
    }

    /// Registered hooks.
    #[must_use]
    pub const fn hooks(&self) -> &HookTable {
        &self.hooks
    }

    /// Step catalog used to bind step lines.
    #[must_use]
    pub const fn catalog(&self) -> &StepCatalog {
        &self.catalog
    }

    /// Run one scenario.
    ///
    /// A scenario skipped by a tag reports every step as skipped. The first
    /// failing step stops execution and the following steps are reported as
    /// skipped. A hook failure is reported as a failed `Before`/`After` entry.
    pub fn run(
        &self,
        ctx: &mut ScenarioContext,
        scenario: &ScenarioDescriptor,
        steps: &[StepLine],
    ) -> ScenarioReport {
        let start = Instant::now();
        let mut results = Vec::with_capacity(steps.len());

        let execute = match self.hooks.run_before(ctx, scenario) {
            Ok(HookOutcome::Continue) => true,
            Ok(HookOutcome::Skipped) => false,
            Err(err) => {
                warn!(scenario = %scenario.name, error = %err, "before hook failed");
                results.push(StepResult::fail(BEFORE_HOOKS, None, err.to_string()));
                false
            }
        };

        let mut failed = !execute;
        for step in steps {
            if failed {
                results.push(StepResult::skip(&step.text));
                continue;
            }
            let result = self.run_step(ctx, step);
            failed = result.error.is_some();
            results.push(result);
        }

        if let Err(err) = self.hooks.run_after(ctx, scenario) {
            warn!(scenario = %scenario.name, error = %err, "after hook failed");
            results.push(StepResult::fail(AFTER_HOOKS, None, err.to_string()));
        }

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let report = ScenarioReport::new(scenario.name.clone(), ctx.skipped, results, duration_ms);
        info!(
            scenario = %report.scenario,
            passed = report.passed,
            failed = report.failed,
            skipped = report.skipped_steps,
            "scenario finished"
        );
        report
    }

    /// Bind and execute a single step.
    fn run_step(&self, ctx: &mut ScenarioContext, step: &StepLine) -> StepResult {
        let then = match self.catalog.parse(&step.text, step.table.as_ref()) {
            Ok(then) => then,
            Err(err) => return StepResult::fail(&step.text, None, err.to_string()),
        };
        match then.execute(ctx) {
            Ok(()) => StepResult::pass(&step.text, then.name()),
            Err(err) => StepResult::fail(&step.text, Some(then.name().to_string()), err.to_string()),
        }
    }
}
