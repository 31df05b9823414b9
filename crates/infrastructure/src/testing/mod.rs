//! In-process scenario execution

mod hook_table;
mod runner;

pub use hook_table::{HookCounts, HookTable};
pub use runner::{ScenarioRunner, StepLine};
