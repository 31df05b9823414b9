//! Scenario execution reports.
//!
//! Produced by the scenario runner once every step of a scenario has been
//! executed, skipped or abandoned after a failure.

use serde::{Deserialize, Serialize};

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The step ran and its assertion held.
    Passed,
    /// The step ran and failed.
    Failed,
    /// The step was not executed.
    Skipped,
}

/// Result of running a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Step text as written in the scenario.
    pub step: String,
    /// Predicate the step was bound to, when it was resolved.
    pub predicate: Option<String>,
    /// Outcome.
    pub status: StepStatus,
    /// Error message if failed.
    pub error: Option<String>,
}

impl StepResult {
    /// Create a passed result.
    #[must_use]
    pub fn pass(step: impl Into<String>, predicate: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            predicate: Some(predicate.into()),
            status: StepStatus::Passed,
            error: None,
        }
    }

    /// Create a failed result.
    #[must_use]
    pub fn fail(step: impl Into<String>, predicate: Option<String>, error: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            predicate,
            status: StepStatus::Failed,
            error: Some(error.into()),
        }
    }

    /// Create a skipped result.
    #[must_use]
    pub fn skip(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            predicate: None,
            status: StepStatus::Skipped,
            error: None,
        }
    }
}

/// Results from running one scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario that was run.
    pub scenario: String,
    /// Whether a tag short-circuited the scenario.
    pub skipped: bool,
    /// Individual step results.
    pub results: Vec<StepResult>,
    /// Total number of steps.
    pub total: usize,
    /// Number of passed steps.
    pub passed: usize,
    /// Number of failed steps.
    pub failed: usize,
    /// Number of steps that were not executed.
    pub skipped_steps: usize,
    /// Execution time in milliseconds.
    pub duration_ms: u64,
}

impl ScenarioReport {
    /// Create a new report, tallying the results.
    #[must_use]
    pub fn new(
        scenario: impl Into<String>,
        skipped: bool,
        results: Vec<StepResult>,
        duration_ms: u64,
    ) -> Self {
        let count = |status: StepStatus| results.iter().filter(|r| r.status == status).count();
        let passed = count(StepStatus::Passed);
        let failed = count(StepStatus::Failed);
        let skipped_steps = count(StepStatus::Skipped);

        Self {
            scenario: scenario.into(),
            skipped,
            total: results.len(),
            results,
            passed,
            failed,
            skipped_steps,
            duration_ms,
        }
    }

    /// Check if no step failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// First failure message, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.results.iter().find_map(|r| r.error.as_deref())
    }
}
